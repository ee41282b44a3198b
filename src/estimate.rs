use crate::models::FinnhubQuote;
use crate::utils::{round_cents, round_percent};

/// DIA tracks the Dow at roughly 1/100th of its value.
pub const DIA_TO_DOW_RATIO: f64 = 99.91;

pub const DOW_THRESHOLD: f64 = 50_000.0;

/// Dow Jones values estimated from a DIA quote.
#[derive(Debug, Clone, PartialEq)]
pub struct DowEstimate {
    pub dow: f64,
    pub previous_close: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub change: f64,
    pub change_percent: f64,
    pub above_threshold: bool,
}

impl DowEstimate {
    /// Rescales `quote` by `ratio`.
    ///
    /// Price fields are rounded to cents independently. `change` and
    /// `change_percent` are taken from the unrounded values, and so is the
    /// threshold comparison.
    pub fn from_quote(quote: &FinnhubQuote, ratio: f64) -> Self {
        let dow: f64 = quote.c * ratio;
        let previous_close: f64 = quote.pc * ratio;
        let change: f64 = dow - previous_close;

        DowEstimate {
            dow: round_cents(dow),
            previous_close: round_cents(previous_close),
            open: round_cents(quote.o * ratio),
            high: round_cents(quote.h * ratio),
            low: round_cents(quote.l * ratio),
            change: round_cents(change),
            change_percent: round_percent(change / previous_close),
            above_threshold: is_above_threshold(dow),
        }
    }
}

pub fn is_above_threshold(estimate: f64) -> bool {
    estimate >= DOW_THRESHOLD
}
