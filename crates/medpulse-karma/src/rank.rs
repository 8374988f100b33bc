//! Threshold-based rank derivation and progress computation.

use serde::{Deserialize, Serialize};

use crate::points::KarmaActivity;

/// Canonical rank table, ascending by minimum karma. The profile surface in
/// the original product shipped a conflicting 4-tier table; this 9-tier
/// table is the single authoritative one.
pub const RANK_THRESHOLDS: &[(i64, &str)] = &[
    (0, "Rookie"),
    (10, "Private"),
    (50, "Corporal"),
    (100, "Sergeant"),
    (500, "Lieutenant"),
    (1000, "Captain"),
    (2500, "Major"),
    (5000, "Colonel"),
    (10000, "General"),
];

/// Sentinel reported as the next rank once the top tier is reached.
pub const MAX_RANK_LABEL: &str = "Max Level";

/// Position between two adjacent thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankProgress {
    pub current: i64,
    pub next: i64,
    /// Percentage in `[0, 100]`.
    pub progress: f64,
    pub next_rank: String,
}

/// Derived, recomputed-on-read karma stats for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserKarmaStats {
    pub total_karma: i64,
    pub rank: String,
    pub rank_progress: RankProgress,
}

/// Sum of all ledger points for the user.
pub fn total_karma(activities: &[KarmaActivity]) -> i64 {
    activities.iter().map(|a| a.points).sum()
}

/// Label of the highest threshold not exceeding the total. Totals below the
/// first threshold (possible with enough penalties) stay at the first rank.
pub fn derive_rank(total_karma: i64) -> &'static str {
    RANK_THRESHOLDS
        .iter()
        .rev()
        .find(|(min, _)| total_karma >= *min)
        .map(|(_, label)| *label)
        .unwrap_or(RANK_THRESHOLDS[0].1)
}

/// Progress from the current rank toward the next one.
///
/// At the top rank, progress is clamped to 100 and the next rank reports
/// the terminal sentinel. An unrecognized rank label falls back to the
/// first table entry.
pub fn rank_progress(total_karma: i64, current_rank: &str) -> RankProgress {
    let index = RANK_THRESHOLDS
        .iter()
        .position(|(_, label)| *label == current_rank)
        .unwrap_or(0);

    if index == RANK_THRESHOLDS.len() - 1 {
        return RankProgress {
            current: total_karma,
            next: total_karma,
            progress: 100.0,
            next_rank: MAX_RANK_LABEL.to_string(),
        };
    }

    let (current_threshold, _) = RANK_THRESHOLDS[index];
    let (next_threshold, next_label) = RANK_THRESHOLDS[index + 1];
    let span = (next_threshold - current_threshold) as f64;
    let progress = (100.0 * (total_karma - current_threshold) as f64 / span).clamp(0.0, 100.0);

    RankProgress {
        current: total_karma,
        next: next_threshold,
        progress,
        next_rank: next_label.to_string(),
    }
}

/// Fold a user's ledger into displayed stats.
pub fn user_karma_stats(activities: &[KarmaActivity]) -> UserKarmaStats {
    let total = total_karma(activities);
    let rank = derive_rank(total);
    UserKarmaStats {
        total_karma: total,
        rank: rank.to_string(),
        rank_progress: rank_progress(total, rank),
    }
}
