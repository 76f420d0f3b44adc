//! Scores the two trains in a conflict and emits a precedence recommendation.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::{Action, Conflict, OccupiedInterval, Priority, Suggestion, TrainType};
use indexmap::IndexMap;
use rand::Rng;

const HIGH_PRIORITY_TYPES: [TrainType; 5] = [
    TrainType::Rajdhani,
    TrainType::Shatabdi,
    TrainType::VandeBharat,
    TrainType::Superfast,
    TrainType::Duronto,
];

const NORMAL_PRIORITY_TYPES: [TrainType; 4] = [
    TrainType::Express,
    TrainType::Mail,
    TrainType::SamparkKranti,
    TrainType::Humsafar,
];

fn priority_score(priority: Priority, train_type: TrainType) -> f64 {
    if priority == Priority::High || HIGH_PRIORITY_TYPES.contains(&train_type) {
        1.0
    } else if priority == Priority::Normal || NORMAL_PRIORITY_TYPES.contains(&train_type) {
        0.6
    } else {
        0.3
    }
}

// Saturates at 20 minutes so small delays still separate scores
fn delay_urgency_score(delay_minutes: i64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let normalized = delay_minutes as f64 / 20.0;
    normalized.min(1.0)
}

fn weighted_score(train: &OccupiedInterval, max_passengers: u32, config: &EngineConfig) -> f64 {
    let passenger_impact = f64::from(train.passenger_count) / f64::from(max_passengers);
    config.weights.priority * priority_score(train.priority, train.train_type)
        + config.weights.passenger_impact * passenger_impact
        + config.weights.delay * delay_urgency_score(train.predicted_delay_minutes)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn confidence_percent(score_diff: f64) -> u8 {
    let mut confidence = (60.0 + score_diff * 80.0).floor() as i64;
    confidence = confidence.clamp(51, 99);
    if score_diff < 0.1 {
        // Low separation between the scores: lower confidence accordingly
        confidence = (confidence - 15).max(55);
    }
    confidence as u8
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn build_reason(winner: &OccupiedInterval, other: &OccupiedInterval) -> String {
    let mut reason = format!(
        "{} ({}) is prioritized. ",
        winner.train_name, winner.train_number
    );

    let mut grounds = Vec::new();
    if priority_score(winner.priority, winner.train_type)
        > priority_score(other.priority, other.train_type)
    {
        grounds.push("it has higher operational priority".to_string());
    }
    if f64::from(winner.passenger_count) > f64::from(other.passenger_count) * 1.1 {
        grounds.push(format!(
            "it affects more passengers ({} vs {})",
            winner.passenger_count, other.passenger_count
        ));
    }
    if winner.predicted_delay_minutes > other.predicted_delay_minutes + 5 {
        grounds.push(format!(
            "it is already running later ({} min)",
            winner.predicted_delay_minutes
        ));
    }

    if grounds.is_empty() {
        reason.push_str(
            "It has a slightly better overall operational score based on current conditions.",
        );
    } else {
        reason.push_str(&format!("This is because {}.", grounds.join(", and ")));
    }
    reason
}

/// Resolve one conflict into a suggestion
///
/// `intervals` must contain both conflicting trains (it is the window the
/// conflict was detected in); passenger impact is normalized against the
/// largest load in that window.
///
/// # Errors
///
/// Returns [`EngineError::UnresolvableConflict`] when a conflicting train
/// number is absent from `intervals`.
pub fn score_conflict<R: Rng + ?Sized>(
    conflict: &Conflict,
    intervals: &[OccupiedInterval],
    config: &EngineConfig,
    rng: &mut R,
) -> Result<Suggestion, EngineError> {
    let resolve = |train_number: &str| {
        intervals
            .iter()
            .find(|t| t.train_number == train_number)
            .ok_or_else(|| EngineError::UnresolvableConflict {
                conflict_id: conflict.conflict_id.clone(),
                train_number: train_number.to_string(),
            })
    };
    let first = resolve(&conflict.trains[0])?;
    let second = resolve(&conflict.trains[1])?;

    let max_passengers = intervals
        .iter()
        .map(|t| t.passenger_count)
        .max()
        .unwrap_or(0)
        .max(1);

    let score_first = weighted_score(first, max_passengers, config);
    let score_second = weighted_score(second, max_passengers, config);
    // Ties go to the first-listed train
    let (winner, other) = if score_first >= score_second {
        (first, second)
    } else {
        (second, first)
    };
    let score_diff = (score_first - score_second).abs();

    #[allow(clippy::cast_possible_truncation)]
    let estimated_saved = (score_diff * 10.0 + rng.random_range(1.0..4.0)).round() as i64;

    let mut scores = IndexMap::new();
    scores.insert(first.train_number.clone(), round2(score_first));
    scores.insert(second.train_number.clone(), round2(score_second));

    let label = |t: &OccupiedInterval| format!("{} ({})", t.train_name, t.train_number);

    Ok(Suggestion {
        suggestion_id: format!("sugg-{}", conflict.conflict_id),
        conflict_id: conflict.conflict_id.clone(),
        action: Action::Hold,
        suggested_first: winner.train_number.clone(),
        trains: [label(first), label(second)],
        station_code: conflict.station_code.clone(),
        platform: conflict.platform.clone(),
        scores,
        confidence_percent: confidence_percent(score_diff),
        estimated_passenger_delay_saved_min: estimated_saved,
        reason: build_reason(winner, other),
        illustrative: false,
    })
}
