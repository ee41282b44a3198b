use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::error::StoreError;
use crate::store::KeyValueStore;
use crate::utils::iso_millis;

pub const LAST_ABOVE_KEY: &str = "lastAbove50k";

/// Reported when no crossing has ever been recorded.
pub const FALLBACK_LAST_ABOVE: &str = "2026-02-11T20:00:00.000Z";

/// Remembers the last time the estimate was at or above the threshold.
#[derive(Clone)]
pub struct ThresholdTracker {
    store: Arc<dyn KeyValueStore>,
}

impl ThresholdTracker {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        ThresholdTracker { store }
    }

    /// Returns the `lastAbove50k` value for this observation.
    ///
    /// Above the threshold, `now` is written to the store and returned; a
    /// failed write is an error. Below it, the stored value is read, and a
    /// failed read or an empty slot yields [`FALLBACK_LAST_ABOVE`].
    ///
    /// # Parameters
    /// - `above_threshold`: Whether the current estimate met the threshold.
    /// - `now`: Time of this observation.
    ///
    pub async fn last_above(
        &self,
        above_threshold: bool,
        now: DateTime<Utc>,
    ) -> Result<String, StoreError> {
        if above_threshold {
            let stamp: String = iso_millis(now);
            self.store.set(LAST_ABOVE_KEY, &stamp).await?;
            debug!("recorded {} = {}", LAST_ABOVE_KEY, stamp);
            return Ok(stamp);
        }

        match self.store.get(LAST_ABOVE_KEY).await {
            Ok(Some(stamp)) => Ok(stamp),
            Ok(None) => Ok(FALLBACK_LAST_ABOVE.to_string()),
            Err(err) => {
                warn!("reading {} failed, using fallback: {}", LAST_ABOVE_KEY, err);
                Ok(FALLBACK_LAST_ABOVE.to_string())
            }
        }
    }
}
