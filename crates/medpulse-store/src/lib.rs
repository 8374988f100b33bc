//! MedPulse Store — the thin persistence layer the analysis crates never
//! touch directly. Stands in for the hosted relational-database-as-a-service
//! behind the original product: generic CRUD plus the handful of business
//! rules (vote toggling, append-only karma ledger) re-executed per request.

pub mod schema;
pub mod sqlite;
pub mod types;

pub use sqlite::{content_hash, SocialStore};
pub use types::{NewPost, Post, SearchHit, StoreStats, VoteDirection, VoteOutcome};
