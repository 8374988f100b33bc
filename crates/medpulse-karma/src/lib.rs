//! MedPulse Karma — deterministic rank engine over an append-only ledger.
//!
//! Every recorded activity carries a fixed point value; a user's rank is
//! never stored, only recomputed from the ledger sum on each read. There is
//! no promotion event — the displayed rank is eventually consistent with
//! the ledger as of the last read.

pub mod points;
pub mod rank;

pub use points::{ActivityType, KarmaActivity};
pub use rank::{
    derive_rank, rank_progress, total_karma, user_karma_stats, RankProgress, UserKarmaStats,
    MAX_RANK_LABEL, RANK_THRESHOLDS,
};
