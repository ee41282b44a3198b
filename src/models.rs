use serde::{Deserialize, Serialize};

// Data types to receive and structure data

/// Quote as returned by Finnhub's `/api/v1/quote`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FinnhubQuote {
    /// Current price.
    pub c: f64,
    /// Previous close.
    pub pc: f64,
    pub o: f64,
    pub h: f64,
    pub l: f64,
    /// Observation time, unix seconds.
    pub t: i64,
}

/// Body of a successful `/api/dow` response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DowSnapshot {
    pub dow: f64,
    #[serde(rename = "previousClose")]
    pub previous_close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub change: f64,
    #[serde(rename = "changePercent")]
    pub change_percent: f64,
    pub timestamp: i64,
    #[serde(rename = "above50k")]
    pub above_50k: bool,
    #[serde(rename = "lastAbove50k")]
    pub last_above_50k: String,
    pub source: String,
    pub raw_dia: f64,
}

/// Body of a failed `/api/dow` response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    pub dow: Option<f64>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            dow: None,
        }
    }
}
