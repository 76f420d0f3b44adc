use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Dispatcher action recommended by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Proceed,
    Hold,
    Reroute,
}

/// A generated precedence recommendation resolving one conflict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub suggestion_id: String,
    pub conflict_id: String,
    pub action: Action,
    /// Train number that should get the platform first
    pub suggested_first: String,
    /// Display labels, "Name (number)" for each train in the conflict
    pub trains: [String; 2],
    pub station_code: String,
    pub platform: String,
    /// Weighted score per train number, rounded to two decimals
    pub scores: IndexMap<String, f64>,
    pub confidence_percent: u8,
    pub estimated_passenger_delay_saved_min: i64,
    pub reason: String,
    /// True for canned examples padded in when the real feed is sparse;
    /// these do not correspond to detected conflicts.
    pub illustrative: bool,
}
