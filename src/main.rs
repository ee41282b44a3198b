use std::sync::Arc;

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use reqwest::Client;

mod config;
mod error;
mod estimate;
mod finnhub;
mod models;
mod routes;
mod store;
mod tracker;
mod utils;

use config::Config;
use finnhub::FinnhubClient;
use routes::AppState;
use store::{FileStore, KeyValueStore, MemoryStore, TRACKER_NAMESPACE};
use tracker::ThresholdTracker;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config: Config = Config::from_env()?;

    if config.api_key.is_none() {
        warn!("FINNHUB_API_KEY is not set; {} will answer 500", routes::DOW_PATH);
    }

    let store: Arc<dyn KeyValueStore> = match &config.store_dir {
        Some(dir) => {
            let file_store = FileStore::new(dir, TRACKER_NAMESPACE);
            info!("threshold record stored under {}", file_store.dir().display());
            Arc::new(file_store)
        }
        None => {
            info!("threshold record kept in memory");
            Arc::new(MemoryStore::new())
        }
    };

    let quotes = FinnhubClient::new(Client::new(), config.finnhub_base_url.clone());
    info!("fetching quotes from {}", quotes.quote_url());

    let state = AppState {
        config: config.clone(),
        quotes: Arc::new(quotes),
        tracker: ThresholdTracker::new(store),
    };

    info!("listening on {}:{}", config.bind_address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(state.clone()))
            .configure(routes::configure)
    })
    .bind((config.bind_address.as_str(), config.port))?
    .run()
    .await
}
