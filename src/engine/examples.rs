//! Illustrative suggestion pool used to pad a sparse feed.
//!
//! The dashboard shows a fixed-length decision feed; when fewer real conflicts
//! exist, the remaining slots are filled from this pool. Padded entries carry
//! synthetic identifiers and `illustrative: true` so they are never mistaken
//! for detected conflicts.

use crate::models::{Action, Suggestion};
use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;

#[allow(clippy::too_many_arguments)]
fn example(
    n: usize,
    action: Action,
    trains: [(&str, &str); 2],
    station_code: &str,
    platform: &str,
    scores: [f64; 2],
    confidence_percent: u8,
    estimated_saved: i64,
    reason: &str,
) -> Suggestion {
    let mut score_map = IndexMap::new();
    score_map.insert(trains[0].1.to_string(), scores[0]);
    score_map.insert(trains[1].1.to_string(), scores[1]);
    Suggestion {
        suggestion_id: format!("sugg-demo-{n:02}"),
        conflict_id: format!("conf-demo-{n:02}"),
        action,
        suggested_first: trains[0].1.to_string(),
        trains: [
            format!("{} ({})", trains[0].0, trains[0].1),
            format!("{} ({})", trains[1].0, trains[1].1),
        ],
        station_code: station_code.to_string(),
        platform: platform.to_string(),
        scores: score_map,
        confidence_percent,
        estimated_passenger_delay_saved_min: estimated_saved,
        reason: reason.to_string(),
        illustrative: true,
    }
}

/// The fixed pool of canned suggestions
#[must_use]
pub fn example_pool() -> Vec<Suggestion> {
    vec![
        example(
            1,
            Action::Hold,
            [("Tejas Rajdhani", "20501"), ("Kalka Mail", "12311")],
            "NDLS",
            "2",
            [0.82, 0.51],
            87,
            6,
            "Tejas Rajdhani (20501) is prioritized. This is because it has higher operational priority.",
        ),
        example(
            2,
            Action::Proceed,
            [("Shram Shakti Exp", "12451"), ("Unchahar Exp", "14217")],
            "CNB",
            "1",
            [0.66, 0.58],
            71,
            4,
            "Shram Shakti Exp (12451) is prioritized. This is because it affects more passengers (1130 vs 840).",
        ),
        example(
            3,
            Action::Hold,
            [("Vande Bharat", "22439"), ("Pathankot Exp", "14037")],
            "NDLS",
            "7",
            [0.79, 0.44],
            91,
            8,
            "Vande Bharat (22439) is prioritized. This is because it has higher operational priority, and it affects more passengers (1020 vs 610).",
        ),
        example(
            4,
            Action::Reroute,
            [("Goods 4612", "G4612"), ("Farakka Exp", "13483")],
            "GZB",
            "4",
            [0.36, 0.62],
            68,
            3,
            "Farakka Exp (13483) is prioritized. This is because it affects more passengers (890 vs 0).",
        ),
        example(
            5,
            Action::Hold,
            [("Prayagraj Exp", "12417"), ("Sangam Exp", "14163")],
            "ALD",
            "6",
            [0.71, 0.53],
            76,
            5,
            "Prayagraj Exp (12417) is prioritized. This is because it is already running later (11 min).",
        ),
        example(
            6,
            Action::Proceed,
            [("Howrah Rajdhani", "12301"), ("Amritsar Shatabdi", "12013")],
            "NDLS",
            "1",
            [0.84, 0.77],
            59,
            2,
            "Howrah Rajdhani (12301) is prioritized. It has a slightly better overall operational score based on current conditions.",
        ),
        example(
            7,
            Action::Hold,
            [("Gatimaan Exp", "12049"), ("Taj Exp", "12279")],
            "AGC",
            "3",
            [0.74, 0.49],
            82,
            5,
            "Gatimaan Exp (12049) is prioritized. This is because it has higher operational priority.",
        ),
        example(
            8,
            Action::Proceed,
            [("Lucknow Mail", "12229"), ("Padmavat Exp", "14207")],
            "LKO",
            "2",
            [0.63, 0.55],
            66,
            3,
            "Lucknow Mail (12229) is prioritized. This is because it affects more passengers (980 vs 760).",
        ),
        example(
            9,
            Action::Hold,
            [("Humsafar Exp", "12571"), ("Sadbhavna Exp", "14015")],
            "ANVT",
            "5",
            [0.69, 0.47],
            78,
            4,
            "Humsafar Exp (12571) is prioritized. This is because it has higher operational priority.",
        ),
        example(
            10,
            Action::Reroute,
            [("Duronto Exp", "12259"), ("Magadh Exp", "20801")],
            "CNB",
            "8",
            [0.77, 0.60],
            73,
            5,
            "Duronto Exp (12259) is prioritized. This is because it is already running later (9 min).",
        ),
        example(
            11,
            Action::Hold,
            [("Shiv Ganga Exp", "12559"), ("Mahabodhi Exp", "12397")],
            "BSB",
            "9",
            [0.58, 0.52],
            57,
            2,
            "Shiv Ganga Exp (12559) is prioritized. It has a slightly better overall operational score based on current conditions.",
        ),
        example(
            12,
            Action::Proceed,
            [("Kanpur Shatabdi", "12033"), ("EMU Local", "64052")],
            "CNB",
            "2",
            [0.81, 0.38],
            93,
            7,
            "Kanpur Shatabdi (12033) is prioritized. This is because it has higher operational priority, and it affects more passengers (870 vs 420).",
        ),
    ]
}

/// Cap the feed at `target` and fill any remaining slots from the pool
///
/// Pool entries are drawn randomly without replacement; when the pool runs
/// out the feed simply stays short.
pub fn pad_suggestions<R: Rng + ?Sized>(
    suggestions: &mut Vec<Suggestion>,
    target: usize,
    rng: &mut R,
) {
    if suggestions.len() >= target {
        suggestions.truncate(target);
        return;
    }

    let mut pool = example_pool();
    pool.shuffle(rng);
    while suggestions.len() < target {
        let Some(filler) = pool.pop() else {
            break;
        };
        suggestions.push(filler);
    }
}
