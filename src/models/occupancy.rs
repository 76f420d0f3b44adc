use super::{Priority, TrainType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A train's hold on one platform, derived fresh from the schedule each tick
///
/// Invariant: `occupancy_start <= occupancy_end` (dwell is floored at a
/// positive minimum by the builder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupiedInterval {
    pub train_number: String,
    pub train_name: String,
    pub station_code: String,
    /// `None` means no platform has been assigned
    pub platform: Option<String>,
    pub train_type: TrainType,
    pub priority: Priority,
    pub passenger_count: u32,
    pub predicted_delay_minutes: i64,
    pub scheduled_arrival: DateTime<Utc>,
    pub scheduled_departure: DateTime<Utc>,
    pub occupancy_start: DateTime<Utc>,
    pub occupancy_end: DateTime<Utc>,
}
