//! Snapshot KPI aggregation seam.

use crate::models::{Conflict, KpiSnapshot, OccupiedInterval};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Produces the dashboard metric bundle for one snapshot
pub trait KpiAggregator: Send + Sync {
    fn aggregate(
        &self,
        intervals: &[OccupiedInterval],
        conflicts: &[Conflict],
        now: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> KpiSnapshot;
}

/// Demo aggregator: fixed dashboard figures plus the computed conflict count
///
/// Stands in for a real metrics feed; only `conflict_count_next_hour` is
/// derived from the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardKpis;

impl KpiAggregator for DashboardKpis {
    fn aggregate(
        &self,
        _intervals: &[OccupiedInterval],
        conflicts: &[Conflict],
        _now: DateTime<Utc>,
        _window_end: DateTime<Utc>,
    ) -> KpiSnapshot {
        let conflict_count_next_hour = conflicts
            .iter()
            .filter(|c| c.time_to_conflict_minutes < 60)
            .count();

        KpiSnapshot {
            throughput_trains_per_hour: 22,
            avg_delay_minutes: 7.5,
            on_time_percent: 86,
            conflict_resolution_time: 3.2,
            train_density: 11,
            platform_utilization_percent: IndexMap::from([("3".to_string(), 78)]),
            passengers_affected_next_hour: 14_200,
            avg_passenger_delay: 6.3,
            priority_train_punctuality: 91,
            suburban_on_time_rate: 83,
            freight_train_delay: 12,
            goods_volume_moved: 9200,
            freight_priority_decisions: 35,
            signal_failures: 2,
            emergency_holds: 1,
            maintenance_blocks: 2,
            ai_safety_overrides: 3,
            track_utilization: IndexMap::from([
                ("A".to_string(), 85),
                ("B".to_string(), 60),
                ("C".to_string(), 40),
            ]),
            yard_utilization: IndexMap::from([
                ("X".to_string(), 72),
                ("Y".to_string(), 55),
            ]),
            conflict_count_next_hour,
        }
    }
}
