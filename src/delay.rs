//! Delay prediction seam.
//!
//! The engine only knows the `DelayPredictor` capability; the default table
//! implementation stands in for a real delay-prediction feed.

use std::collections::HashMap;

/// Source of predicted delays, queried per train when building occupancies
pub trait DelayPredictor: Send + Sync {
    fn predict_delay_minutes(&self, train_number: &str) -> i64;
}

/// Static lookup table; trains not listed are predicted on time
#[derive(Debug, Clone, Default)]
pub struct TableDelayPredictor {
    delays: HashMap<String, i64>,
}

impl TableDelayPredictor {
    #[must_use]
    pub fn new(delays: HashMap<String, i64>) -> Self {
        Self { delays }
    }

    /// The demo table shipped with the dashboard
    #[must_use]
    pub fn demo() -> Self {
        let mut delays = HashMap::new();
        delays.insert("12951".to_string(), 8);
        delays.insert("11041".to_string(), 15);
        Self { delays }
    }
}

impl DelayPredictor for TableDelayPredictor {
    fn predict_delay_minutes(&self, train_number: &str) -> i64 {
        self.delays.get(train_number).copied().unwrap_or(0)
    }
}
