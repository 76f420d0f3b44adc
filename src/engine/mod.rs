//! The DSS engine: one pure, synchronous snapshot computation per invocation.

mod conflict;
mod examples;
mod kpi;
mod occupancy;
mod suggestion;

pub use conflict::{classify_severity, detect_platform_conflicts};
pub use examples::{example_pool, pad_suggestions};
pub use kpi::{DashboardKpis, KpiAggregator};
pub use occupancy::build_occupancies;
pub use suggestion::score_conflict;

use crate::config::EngineConfig;
use crate::delay::{DelayPredictor, TableDelayPredictor};
use crate::error::EngineError;
use crate::models::{weekday_short_name, OccupiedInterval, ScheduleEntry, Snapshot};
use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

/// Snapshot producer over a static schedule
///
/// Holds no mutable state; every [`Engine::compute_snapshot`] call is an
/// independent computation over the schedule it was built with.
pub struct Engine {
    schedule: Vec<ScheduleEntry>,
    config: EngineConfig,
    delays: Box<dyn DelayPredictor>,
    kpis: Box<dyn KpiAggregator>,
}

impl Engine {
    #[must_use]
    pub fn new(schedule: Vec<ScheduleEntry>) -> Self {
        Self {
            schedule,
            config: EngineConfig::default(),
            delays: Box::new(TableDelayPredictor::demo()),
            kpis: Box::new(DashboardKpis),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_delay_predictor(mut self, delays: Box<dyn DelayPredictor>) -> Self {
        self.delays = delays;
        self
    }

    #[must_use]
    pub fn with_kpi_aggregator(mut self, kpis: Box<dyn KpiAggregator>) -> Self {
        self.kpis = kpis;
        self
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the full snapshot for one reference instant
    ///
    /// All randomness (synthesized passenger loads, delay-saved jitter,
    /// example-pool selection) flows through `rng`, so a seeded generator
    /// makes the output reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnresolvableConflict`] if a detected conflict
    /// references a train missing from the evaluated window; this indicates
    /// an internal inconsistency, not bad input.
    pub fn compute_snapshot<R: Rng + ?Sized>(
        &self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Snapshot, EngineError> {
        let today = now.weekday();

        let running_today = self
            .schedule
            .iter()
            .filter(|entry| entry.running_days.contains_weekday(today));
        let occupancies =
            build_occupancies(running_today, now, &self.config, self.delays.as_ref(), rng);

        let window_end = now + self.config.lookahead;
        let trains_in_window: Vec<OccupiedInterval> = occupancies
            .into_iter()
            .filter(|t| t.occupancy_end > now && t.occupancy_start < window_end)
            .collect();

        let conflicts = detect_platform_conflicts(&trains_in_window, now, &self.config);

        let mut suggestions = conflicts
            .iter()
            .map(|c| score_conflict(c, &trains_in_window, &self.config, rng))
            .collect::<Result<Vec<_>, _>>()?;
        suggestions.truncate(self.config.max_suggestions);
        if self.config.pad_with_examples {
            pad_suggestions(&mut suggestions, self.config.max_suggestions, rng);
        }

        let kpis = self
            .kpis
            .aggregate(&trains_in_window, &conflicts, now, window_end);

        log::info!(
            "snapshot at {now}: {} trains in window, {} conflicts, {} suggestions",
            trains_in_window.len(),
            conflicts.len(),
            suggestions.len()
        );

        Ok(Snapshot {
            view_timestamp: now,
            today: weekday_short_name(today).to_string(),
            relevant_window_minutes: self.config.lookahead.num_minutes(),
            trains_in_window,
            conflicts,
            suggestions,
            kpis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DaysOfWeek, Severity, TrainType};
    use crate::time::parse_time_hm;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(
        train_number: &str,
        platform: Option<&str>,
        arrival: &str,
        departure: &str,
        running_days: DaysOfWeek,
    ) -> ScheduleEntry {
        ScheduleEntry {
            train_number: train_number.to_string(),
            train_name: format!("Train {train_number}"),
            train_type: TrainType::Express,
            station_code: "NDLS".to_string(),
            platform: platform.map(ToString::to_string),
            running_days,
            arrival_time: parse_time_hm(arrival).ok(),
            departure_time: parse_time_hm(departure).ok(),
            passenger_count: Some(800),
        }
    }

    // 2024-05-03 is a Friday
    fn friday(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 3, h, m, 0).single().expect("valid datetime")
    }

    #[test]
    fn test_worked_example_one_conflict() {
        let schedule = vec![
            entry("A", Some("3"), "10:00", "10:10", DaysOfWeek::ALL_DAYS),
            entry("B", Some("3"), "10:05", "10:15", DaysOfWeek::ALL_DAYS),
        ];
        let engine = Engine::new(schedule);
        let snapshot = engine
            .compute_snapshot(friday(9, 30), &mut StdRng::seed_from_u64(1))
            .expect("should compute");

        assert_eq!(snapshot.today, "Fri");
        assert_eq!(snapshot.relevant_window_minutes, 90);
        assert_eq!(snapshot.trains_in_window.len(), 2);
        assert_eq!(snapshot.conflicts.len(), 1);

        let conflict = &snapshot.conflicts[0];
        assert_eq!(
            conflict.overlap_start,
            friday(10, 2),
            "occupancy B starts at 10:02 (arrival minus 3 min lead)"
        );
        assert_eq!(conflict.overlap_end, friday(10, 10));
    }

    #[test]
    fn test_worked_example_different_platforms() {
        let schedule = vec![
            entry("A", Some("3"), "10:00", "10:10", DaysOfWeek::ALL_DAYS),
            entry("B", Some("4"), "10:05", "10:15", DaysOfWeek::ALL_DAYS),
        ];
        let engine = Engine::new(schedule);
        let snapshot = engine
            .compute_snapshot(friday(9, 30), &mut StdRng::seed_from_u64(1))
            .expect("should compute");
        assert!(snapshot.conflicts.is_empty());
    }

    #[test]
    fn test_severity_high_eight_minutes_out() {
        let schedule = vec![
            entry("A", Some("3"), "10:00", "10:10", DaysOfWeek::ALL_DAYS),
            entry("B", Some("3"), "10:05", "10:15", DaysOfWeek::ALL_DAYS),
        ];
        let engine = Engine::new(schedule);
        // Overlap starts 10:02; at 09:54 that is 8 minutes out
        let snapshot = engine
            .compute_snapshot(friday(9, 54), &mut StdRng::seed_from_u64(1))
            .expect("should compute");
        assert_eq!(snapshot.conflicts[0].severity, Severity::High);
    }

    #[test]
    fn test_weekday_filter() {
        let schedule = vec![
            entry("A", Some("3"), "10:00", "10:10", DaysOfWeek::ALL_DAYS),
            entry("B", Some("3"), "10:05", "10:15", DaysOfWeek::MONDAY),
        ];
        let engine = Engine::new(schedule);
        let snapshot = engine
            .compute_snapshot(friday(9, 30), &mut StdRng::seed_from_u64(1))
            .expect("should compute");

        assert_eq!(snapshot.trains_in_window.len(), 1);
        assert!(snapshot.conflicts.is_empty());
    }

    #[test]
    fn test_window_filter_excludes_out_of_window_trains() {
        let schedule = vec![
            // Ends before now
            entry("A", Some("3"), "08:00", "08:10", DaysOfWeek::ALL_DAYS),
            // Starts after the 90-minute window
            entry("B", Some("3"), "11:30", "11:40", DaysOfWeek::ALL_DAYS),
            // In window
            entry("C", Some("3"), "10:00", "10:10", DaysOfWeek::ALL_DAYS),
        ];
        let engine = Engine::new(schedule);
        let snapshot = engine
            .compute_snapshot(friday(9, 30), &mut StdRng::seed_from_u64(1))
            .expect("should compute");

        assert_eq!(snapshot.trains_in_window.len(), 1);
        assert_eq!(snapshot.trains_in_window[0].train_number, "C");
    }

    #[test]
    fn test_suggestion_count_is_min_of_target_and_available() {
        // One real conflict, pool of 12: feed still caps at 12
        let schedule = vec![
            entry("A", Some("3"), "10:00", "10:10", DaysOfWeek::ALL_DAYS),
            entry("B", Some("3"), "10:05", "10:15", DaysOfWeek::ALL_DAYS),
        ];
        let engine = Engine::new(schedule);
        let snapshot = engine
            .compute_snapshot(friday(9, 30), &mut StdRng::seed_from_u64(1))
            .expect("should compute");

        assert_eq!(snapshot.suggestions.len(), 12);
        assert!(!snapshot.suggestions[0].illustrative);
        assert_eq!(snapshot.suggestions.iter().filter(|s| !s.illustrative).count(), 1);
    }

    #[test]
    fn test_padding_disabled_leaves_real_suggestions_only() {
        let schedule = vec![
            entry("A", Some("3"), "10:00", "10:10", DaysOfWeek::ALL_DAYS),
            entry("B", Some("3"), "10:05", "10:15", DaysOfWeek::ALL_DAYS),
        ];
        let config = EngineConfig {
            pad_with_examples: false,
            ..EngineConfig::default()
        };
        let engine = Engine::new(schedule).with_config(config);
        let snapshot = engine
            .compute_snapshot(friday(9, 30), &mut StdRng::seed_from_u64(1))
            .expect("should compute");

        assert_eq!(snapshot.suggestions.len(), 1);
        assert!(!snapshot.suggestions[0].illustrative);
    }

    #[test]
    fn test_feed_never_exceeds_target() {
        // 6 trains stacked on one platform give C(6,2) = 15 conflicts
        let mut schedule = Vec::new();
        for i in 0..6 {
            schedule.push(entry(
                &format!("T{i}"),
                Some("3"),
                "10:00",
                "10:30",
                DaysOfWeek::ALL_DAYS,
            ));
        }
        let engine = Engine::new(schedule);
        let snapshot = engine
            .compute_snapshot(friday(9, 30), &mut StdRng::seed_from_u64(1))
            .expect("should compute");

        assert_eq!(snapshot.conflicts.len(), 15);
        assert_eq!(snapshot.suggestions.len(), 12);
        assert!(snapshot.suggestions.iter().all(|s| !s.illustrative));
    }

    #[test]
    fn test_same_seed_same_snapshot() {
        let mut no_count = entry("A", Some("3"), "10:00", "10:10", DaysOfWeek::ALL_DAYS);
        no_count.passenger_count = None;
        let schedule = vec![
            no_count,
            entry("B", Some("3"), "10:05", "10:15", DaysOfWeek::ALL_DAYS),
        ];
        let engine = Engine::new(schedule);

        let first = engine
            .compute_snapshot(friday(9, 30), &mut StdRng::seed_from_u64(99))
            .expect("should compute");
        let second = engine
            .compute_snapshot(friday(9, 30), &mut StdRng::seed_from_u64(99))
            .expect("should compute");

        assert_eq!(first, second);
    }

    #[test]
    fn test_kpi_conflict_count_reflects_window() {
        let schedule = vec![
            entry("A", Some("3"), "10:00", "10:10", DaysOfWeek::ALL_DAYS),
            entry("B", Some("3"), "10:05", "10:15", DaysOfWeek::ALL_DAYS),
        ];
        let engine = Engine::new(schedule);
        let snapshot = engine
            .compute_snapshot(friday(9, 30), &mut StdRng::seed_from_u64(1))
            .expect("should compute");
        assert_eq!(snapshot.kpis.conflict_count_next_hour, 1);
    }

    #[test]
    fn test_empty_schedule_still_produces_snapshot() {
        let engine = Engine::new(Vec::new());
        let snapshot = engine
            .compute_snapshot(friday(9, 30), &mut StdRng::seed_from_u64(1))
            .expect("should compute");

        assert!(snapshot.trains_in_window.is_empty());
        assert!(snapshot.conflicts.is_empty());
        // Feed padded entirely from the example pool
        assert_eq!(snapshot.suggestions.len(), 12);
        assert!(snapshot.suggestions.iter().all(|s| s.illustrative));
    }
}
