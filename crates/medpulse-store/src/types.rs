//! Store row types.

use serde::{Deserialize, Serialize};

/// A stored post with its tags loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub upvotes: i64,
    pub downvotes: i64,
    /// Epoch milliseconds.
    pub created_at: i64,
    pub tags: Vec<String>,
}

/// Input for creating a post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPost {
    pub author_id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Override for backfills/tests; defaults to now.
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Vote direction on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn as_int(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// What a vote request actually did, under the toggle rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteOutcome {
    /// No prior vote — the vote was recorded.
    Added,
    /// Prior vote in the other direction — flipped.
    Changed,
    /// Prior vote in the same direction — withdrawn.
    Removed,
}

/// A search candidate with its baseline relevance score, before the
/// medical-term re-ranking pass.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub relevance_score: f64,
}

/// Storage statistics.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStats {
    pub total_posts: i64,
    pub total_votes: i64,
    pub total_activities: i64,
    pub analyses_recorded: i64,
    pub db_path: String,
    pub db_size_mb: f64,
}
