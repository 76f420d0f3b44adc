use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Operational metrics shown on the dashboard
///
/// Apart from `conflict_count_next_hour` these are fixed demo figures, not
/// derived from the schedule; see the default aggregator in `engine::kpi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSnapshot {
    pub throughput_trains_per_hour: u32,
    pub avg_delay_minutes: f64,
    pub on_time_percent: u32,
    pub conflict_resolution_time: f64,
    pub train_density: u32,
    pub platform_utilization_percent: IndexMap<String, u32>,
    pub passengers_affected_next_hour: u32,
    pub avg_passenger_delay: f64,
    pub priority_train_punctuality: u32,
    pub suburban_on_time_rate: u32,
    pub freight_train_delay: u32,
    pub goods_volume_moved: u32,
    pub freight_priority_decisions: u32,
    pub signal_failures: u32,
    pub emergency_holds: u32,
    pub maintenance_blocks: u32,
    pub ai_safety_overrides: u32,
    pub track_utilization: IndexMap<String, u32>,
    pub yard_utilization: IndexMap<String, u32>,
    /// Computed: conflicts whose overlap begins within the next hour
    pub conflict_count_next_hour: usize,
}
