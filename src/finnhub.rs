use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::ApiError;
use crate::models::FinnhubQuote;

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io";

/// SPDR Dow Jones Industrial Average ETF.
pub const DIA_SYMBOL: &str = "DIA";

/// Something that can produce the current DIA quote.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self, api_key: &str) -> Result<FinnhubQuote, ApiError>;
}

/// Finnhub quote endpoint client.
#[derive(Debug, Clone)]
pub struct FinnhubClient {
    client: Client,
    base_url: String,
}

impl FinnhubClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        FinnhubClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn quote_url(&self) -> String {
        format!("{}/api/v1/quote", self.base_url)
    }
}

#[async_trait]
impl QuoteSource for FinnhubClient {
    /// Fetches the DIA quote.
    ///
    /// # Parameters
    /// - `api_key`: Finnhub token, sent as the `token` query parameter.
    ///
    async fn fetch_quote(&self, api_key: &str) -> Result<FinnhubQuote, ApiError> {
        let response: reqwest::Response = self
            .client
            .get(self.quote_url())
            .query(&[("symbol", DIA_SYMBOL), ("token", api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Provider {
                status: response.status().as_u16(),
            });
        }

        let response_text: String = response.text().await?;
        let quote: FinnhubQuote = serde_json::from_str(&response_text)?;

        debug!("fetched {} quote: c={} pc={} t={}", DIA_SYMBOL, quote.c, quote.pc, quote.t);

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpResponse, HttpServer};
    use std::collections::HashMap;
    use std::net::SocketAddr;

    /// Serves `/api/v1/quote` on an ephemeral port with the given handler.
    fn fake_finnhub<F, Fut>(handler: F) -> SocketAddr
    where
        F: Fn(web::Query<HashMap<String, String>>) -> Fut + Clone + Send + 'static,
        Fut: std::future::Future<Output = HttpResponse> + 'static,
    {
        let server = HttpServer::new(move || {
            App::new().route("/api/v1/quote", web::get().to(handler.clone()))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();
        let addr = server.addrs()[0];
        actix_rt::spawn(server.run());
        addr
    }

    fn local_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[test]
    fn quote_url_trims_trailing_slash() {
        let client = FinnhubClient::new(Client::new(), "https://finnhub.io/");
        assert_eq!(client.quote_url(), "https://finnhub.io/api/v1/quote");
    }

    #[actix_rt::test]
    async fn sends_symbol_and_token_and_parses_quote() {
        let addr = fake_finnhub(|query: web::Query<HashMap<String, String>>| async move {
            let authorised = query.get("symbol").map(String::as_str) == Some("DIA")
                && query.get("token").map(String::as_str) == Some("test-key");
            if authorised {
                HttpResponse::Ok().body(
                    r#"{"c":450,"d":2,"dp":0.45,"h":451.25,"l":447.5,"o":449,"pc":448,"t":1760731200}"#,
                )
            } else {
                HttpResponse::Unauthorized().finish()
            }
        });
        let client = FinnhubClient::new(local_client(), format!("http://{addr}"));

        let quote = client.fetch_quote("test-key").await.unwrap();

        assert_eq!(
            quote,
            FinnhubQuote { c: 450.0, pc: 448.0, o: 449.0, h: 451.25, l: 447.5, t: 1_760_731_200 }
        );
    }

    #[actix_rt::test]
    async fn non_success_status_is_a_provider_error() {
        let addr = fake_finnhub(|_query: web::Query<HashMap<String, String>>| async {
            HttpResponse::ServiceUnavailable().finish()
        });
        let client = FinnhubClient::new(local_client(), format!("http://{addr}"));

        let err = client.fetch_quote("test-key").await.unwrap_err();

        assert!(matches!(err, ApiError::Provider { status: 503 }));
        assert_eq!(err.to_string(), "Finnhub returned 503");
    }

    #[actix_rt::test]
    async fn malformed_body_is_a_parse_error() {
        let addr = fake_finnhub(|_query: web::Query<HashMap<String, String>>| async {
            HttpResponse::Ok().body("<html>maintenance</html>")
        });
        let client = FinnhubClient::new(local_client(), format!("http://{addr}"));

        let err = client.fetch_quote("test-key").await.unwrap_err();

        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[actix_rt::test]
    async fn transport_error_hides_the_api_key() {
        // Bind then drop a listener so the port is known to be closed.
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let client = FinnhubClient::new(local_client(), format!("http://{addr}"));

        let err = client.fetch_quote("secret-key").await.unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.to_string().contains("secret-key"));
    }
}
