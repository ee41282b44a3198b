use std::io;

use actix_web::{http::header, http::StatusCode, HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::models::ErrorBody;

/// Failures that end a `/api/dow` request with a 500.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The upstream API key is missing or empty.
    #[error("FINNHUB_API_KEY not configured")]
    Configuration,

    /// Finnhub answered with a non-success status.
    #[error("Finnhub returned {status}")]
    Provider { status: u16 },

    /// The request never produced a response (DNS, connect, timeout, reset).
    #[error("{0}")]
    Transport(reqwest::Error),

    /// The response body was not a quote.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Writing the threshold record failed.
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl From<reqwest::Error> for ApiError {
    // The request URL carries the API key as a query parameter.
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.without_url())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        error!("dow request failed: {}", self);

        let mut response = HttpResponse::build(self.status_code());
        if !matches!(self, ApiError::Configuration) {
            response.insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"));
        }

        response.json(ErrorBody::new(self.to_string()))
    }
}

/// Key-value store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid store key '{0}'")]
    InvalidKey(String),
}

/// Startup configuration failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535: '{0}'")]
    InvalidPort(String),
}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    }
}
