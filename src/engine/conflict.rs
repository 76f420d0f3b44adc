//! Platform-occupancy conflict detection.

use crate::config::{EngineConfig, SeverityThresholds};
use crate::models::{Conflict, OccupiedInterval, Severity};
use crate::time::minutes_between;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// Severity is a pure function of minutes until the overlap begins
#[must_use]
pub fn classify_severity(minutes_to_conflict: i64, thresholds: &SeverityThresholds) -> Severity {
    if minutes_to_conflict <= thresholds.high_within_minutes {
        Severity::High
    } else if minutes_to_conflict <= thresholds.medium_within_minutes {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Find all pairwise occupancy overlaps within each (station, platform) group
///
/// Intervals without an assigned platform never conflict. Pairs are compared
/// in insertion order within each group; O(n²) per group, with single-digit
/// to low-tens group sizes in practice.
#[must_use]
pub fn detect_platform_conflicts(
    intervals: &[OccupiedInterval],
    now: DateTime<Utc>,
    config: &EngineConfig,
) -> Vec<Conflict> {
    let mut groups: IndexMap<(&str, &str), Vec<&OccupiedInterval>> = IndexMap::new();
    for interval in intervals {
        let Some(platform) = interval.platform.as_deref() else {
            continue;
        };
        groups
            .entry((interval.station_code.as_str(), platform))
            .or_default()
            .push(interval);
    }

    let mut conflicts = Vec::new();
    for ((station_code, platform), group) in &groups {
        for (i, first) in group.iter().enumerate() {
            for second in group.iter().skip(i + 1) {
                let overlap_start = first.occupancy_start.max(second.occupancy_start);
                let overlap_end = first.occupancy_end.min(second.occupancy_end);
                if overlap_start >= overlap_end {
                    continue;
                }

                let time_to_conflict_minutes = minutes_between(now, overlap_start);
                conflicts.push(Conflict {
                    conflict_id: format!(
                        "conf-{platform}-{}-{}",
                        first.train_number, second.train_number
                    ),
                    station_code: (*station_code).to_string(),
                    platform: (*platform).to_string(),
                    trains: [first.train_number.clone(), second.train_number.clone()],
                    overlap_start,
                    overlap_end,
                    time_to_conflict_minutes,
                    severity: classify_severity(time_to_conflict_minutes, &config.severity),
                });
            }
        }
    }

    conflicts
}
