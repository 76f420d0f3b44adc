use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Urgency bucket for a conflict based on time remaining until overlap begins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Two occupancy intervals on the same platform whose time windows overlap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub conflict_id: String,
    pub station_code: String,
    /// Never the unassigned sentinel: intervals without a platform are
    /// excluded before pairing.
    pub platform: String,
    pub trains: [String; 2],
    pub overlap_start: DateTime<Utc>,
    pub overlap_end: DateTime<Utc>,
    /// Negative when the overlap has already begun
    pub time_to_conflict_minutes: i64,
    pub severity: Severity,
}
