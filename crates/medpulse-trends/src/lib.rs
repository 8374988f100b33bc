//! MedPulse Trends — per-post topic tagging and trending aggregation.
//!
//! Pure functions over caller-supplied post data. Fetching the window of
//! posts (and capping its size) is the caller's responsibility; nothing
//! here performs I/O.

pub mod topics;
pub mod trending;

pub use topics::{extract_topics, PostRecord, SPECIALTY_TOPICS};
pub use trending::{analyze_trending_topics, TrendingTopic};
