use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};
use chrono::Utc;

use crate::config::Config;
use crate::error::ApiError;
use crate::estimate::{DowEstimate, DIA_TO_DOW_RATIO};
use crate::finnhub::QuoteSource;
use crate::models::DowSnapshot;
use crate::tracker::ThresholdTracker;

pub const DOW_PATH: &str = "/api/dow";

pub const SOURCE_LABEL: &str = "Finnhub (DIA ETF estimate)";

const CACHE_CONTROL: &str = "public, max-age=15";

/// Shared per-process handles for the `/api/dow` handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub quotes: Arc<dyn QuoteSource>,
    pub tracker: ThresholdTracker,
}

/// Registers the estimate route. Every method reaches the same handler.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(DOW_PATH, web::route().to(get_dow));
}

async fn get_dow(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let api_key: &str = state
        .config
        .api_key
        .as_deref()
        .filter(|key| !key.is_empty())
        .ok_or(ApiError::Configuration)?;

    let quote = state.quotes.fetch_quote(api_key).await?;
    let estimate = DowEstimate::from_quote(&quote, DIA_TO_DOW_RATIO);
    let last_above_50k: String = state
        .tracker
        .last_above(estimate.above_threshold, Utc::now())
        .await?;

    let snapshot = DowSnapshot {
        dow: estimate.dow,
        previous_close: estimate.previous_close,
        open: estimate.open,
        high: estimate.high,
        low: estimate.low,
        change: estimate.change,
        change_percent: estimate.change_percent,
        timestamp: quote.t,
        above_50k: estimate.above_threshold,
        last_above_50k,
        source: SOURCE_LABEL.to_string(),
        raw_dia: quote.c,
    };

    Ok(HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::CACHE_CONTROL, CACHE_CONTROL))
        .json(snapshot))
}
