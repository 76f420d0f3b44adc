use super::{Conflict, KpiSnapshot, OccupiedInterval, Suggestion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete engine output for one reference instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub view_timestamp: DateTime<Utc>,
    /// Short weekday name of the reference instant, e.g. "Fri"
    pub today: String,
    pub relevant_window_minutes: i64,
    pub trains_in_window: Vec<OccupiedInterval>,
    pub conflicts: Vec<Conflict>,
    pub suggestions: Vec<Suggestion>,
    pub kpis: KpiSnapshot,
}
