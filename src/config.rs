//! Engine tunables, passed explicitly to every snapshot computation.

use chrono::Duration;

/// Weights applied to the per-train component scores when resolving a conflict
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub passenger_impact: f64,
    pub delay: f64,
    pub priority: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            passenger_impact: 0.6,
            delay: 0.25,
            priority: 0.15,
        }
    }
}

/// Severity bucket boundaries in minutes-to-conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityThresholds {
    /// At or below this, severity is High
    pub high_within_minutes: i64,
    /// At or below this (and above the High bound), severity is Medium
    pub medium_within_minutes: i64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            high_within_minutes: 10,
            medium_within_minutes: 30,
        }
    }
}

/// All engine tunables with their operational defaults
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// How far before its scheduled arrival a train is assumed to hold the platform
    pub arrival_lead: Duration,
    /// Floor applied to the scheduled halt when computing occupancy
    pub minimum_dwell: Duration,
    /// Rolling look-ahead window for the snapshot
    pub lookahead: Duration,
    pub weights: ScoreWeights,
    pub severity: SeverityThresholds,
    /// Suggestion feed length the dashboard expects
    pub max_suggestions: usize,
    /// Fill the feed with clearly-labeled illustrative examples when fewer
    /// real conflicts exist
    pub pad_with_examples: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            arrival_lead: Duration::minutes(3),
            minimum_dwell: Duration::minutes(5),
            lookahead: Duration::minutes(90),
            weights: ScoreWeights::default(),
            severity: SeverityThresholds::default(),
            max_suggestions: 12,
            pad_with_examples: true,
        }
    }
}
