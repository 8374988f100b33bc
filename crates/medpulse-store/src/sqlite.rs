//! SQLite-backed social store.
//!
//! Single-connection store behind a mutex, WAL journaling, cached prepared
//! statements. Business rules that the original product re-executed
//! client-side per request (vote toggling, fixed karma point values) are
//! enforced here at the storage boundary instead.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Transaction};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::schema::SCHEMA_SQL;
use crate::types::*;
use medpulse_core::{now_ms, Error, Result};
use medpulse_karma::{ActivityType, KarmaActivity};
use medpulse_text::TextAnalysisResult;

/// How many recent posts the naive search scans.
const SEARCH_SCAN_LIMIT: i64 = 200;

/// SQLite store for posts, votes, the karma ledger, and analysis audit rows.
pub struct SocialStore {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl SocialStore {
    /// Open or create the store.
    ///
    /// `db_dir` is the directory (e.g., `data/socialdb/`); the file will be
    /// `db_dir/medpulse.db`.
    pub fn open(db_dir: impl AsRef<Path>) -> Result<Self> {
        let db_dir = db_dir.as_ref();
        std::fs::create_dir_all(db_dir).map_err(|e| Error::Storage(e.to_string()))?;
        let db_path = db_dir.join("medpulse.db");

        let conn = Self::create_connection(&db_path)?;
        Self::init_schema(&conn)?;

        let store = Self {
            conn: Mutex::new(conn),
            db_path,
        };

        let post_count = store.count_posts()?;
        info!(
            "SocialStore initialized: {} posts, path={}",
            post_count,
            store.db_path.display()
        );

        Ok(store)
    }

    fn create_connection(db_path: &Path) -> Result<Connection> {
        let conn = Connection::open(db_path).map_err(|e| Error::Database(e.to_string()))?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA foreign_keys = ON;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| Error::Database(e.to_string()))?;
        Ok(conn)
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| Error::Database(format!("Schema init failed: {}", e)))
    }

    // ---------------------------------------------------------------
    // Posts
    // ---------------------------------------------------------------

    /// Insert a post with its tags. Returns the new post ID.
    ///
    /// Identical title+content resubmissions are rejected via the content
    /// hash UNIQUE constraint.
    pub fn add_post(&self, new_post: &NewPost) -> Result<i64> {
        if new_post.title.trim().is_empty() || new_post.content.trim().is_empty() {
            return Err(Error::InvalidInput("post title and content are required".into()));
        }

        let hash = content_hash(&format!("{}\n{}", new_post.title, new_post.content));
        let created_at = new_post.created_at.unwrap_or_else(now_ms);

        let mut conn = self.conn.lock();
        let tx = conn.transaction().map_err(|e| Error::Database(e.to_string()))?;

        let post_id = tx
            .prepare_cached(
                "INSERT INTO posts (author_id, title, content, content_hash, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .insert(params![
                new_post.author_id,
                new_post.title,
                new_post.content,
                hash,
                created_at
            ])
            .map_err(|e| {
                if e.to_string().contains("UNIQUE constraint") {
                    Error::DuplicateContent(hash.clone())
                } else {
                    Error::Database(e.to_string())
                }
            })?;

        for tag in &new_post.tags {
            tx.prepare_cached("INSERT INTO post_tags (post_id, tag) VALUES (?1, ?2)")
                .map_err(|e| Error::Database(e.to_string()))?
                .execute(params![post_id, tag])
                .map_err(|e| Error::Database(e.to_string()))?;
        }

        tx.commit().map_err(|e| Error::Database(e.to_string()))?;
        Ok(post_id)
    }

    /// Get a post by ID, tags included.
    pub fn get_post(&self, post_id: i64) -> Result<Option<Post>> {
        let conn = self.conn.lock();
        let post = conn
            .prepare_cached(
                "SELECT id, author_id, title, content, upvotes, downvotes, created_at
                 FROM posts WHERE id = ?1",
            )
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![post_id], Self::row_to_post)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        match post {
            Some(mut post) => {
                post.tags = Self::load_tags(&conn, post.id)?;
                Ok(Some(post))
            }
            None => Ok(None),
        }
    }

    /// Posts created within the last `days` days, newest first, capped at
    /// `limit`. This is the window query the trending analyzer runs over.
    pub fn recent_posts(&self, days: i64, limit: usize) -> Result<Vec<Post>> {
        let cutoff = now_ms() - days * 86_400_000;
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT id, author_id, title, content, upvotes, downvotes, created_at
                 FROM posts WHERE created_at >= ?1
                 ORDER BY created_at DESC LIMIT ?2",
            )
            .map_err(|e| Error::Database(e.to_string()))?;

        let rows = stmt
            .query_map(params![cutoff, limit as i64], Self::row_to_post)
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut posts: Vec<Post> = rows
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| Error::Database(e.to_string()))?;
        for post in &mut posts {
            post.tags = Self::load_tags(&conn, post.id)?;
        }
        Ok(posts)
    }

    fn row_to_post(row: &rusqlite::Row<'_>) -> rusqlite::Result<Post> {
        Ok(Post {
            id: row.get(0)?,
            author_id: row.get(1)?,
            title: row.get(2)?,
            content: row.get(3)?,
            upvotes: row.get(4)?,
            downvotes: row.get(5)?,
            created_at: row.get(6)?,
            tags: Vec::new(),
        })
    }

    fn load_tags(conn: &Connection, post_id: i64) -> Result<Vec<String>> {
        let mut stmt = conn
            .prepare_cached("SELECT tag FROM post_tags WHERE post_id = ?1")
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params![post_id], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))?;
        rows.collect::<std::result::Result<_, _>>()
            .map_err(|e| Error::Database(e.to_string()))
    }

    fn count_posts(&self) -> Result<i64> {
        let conn = self.conn.lock();
        conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))
            .map_err(|e| Error::Database(e.to_string()))
    }

    // ---------------------------------------------------------------
    // Votes
    // ---------------------------------------------------------------

    /// Toggle a user's vote on a post.
    ///
    /// Same direction withdraws the vote, the opposite direction flips it;
    /// the post's counters are adjusted in the same transaction.
    pub fn toggle_vote(
        &self,
        post_id: i64,
        user_id: &str,
        direction: VoteDirection,
    ) -> Result<VoteOutcome> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction().map_err(|e| Error::Database(e.to_string()))?;

        let exists: Option<i64> = tx
            .prepare_cached("SELECT id FROM posts WHERE id = ?1")
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![post_id], |row| row.get(0))
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        if exists.is_none() {
            return Err(Error::NotFound(format!("post {}", post_id)));
        }

        let previous: Option<i64> = tx
            .prepare_cached("SELECT direction FROM post_votes WHERE post_id = ?1 AND user_id = ?2")
            .map_err(|e| Error::Database(e.to_string()))?
            .query_row(params![post_id, user_id], |row| row.get(0))
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        let dir = direction.as_int();
        let outcome = match previous {
            Some(prev) if prev == dir => {
                tx.prepare_cached("DELETE FROM post_votes WHERE post_id = ?1 AND user_id = ?2")
                    .map_err(|e| Error::Database(e.to_string()))?
                    .execute(params![post_id, user_id])
                    .map_err(|e| Error::Database(e.to_string()))?;
                Self::bump_counter(&tx, post_id, dir, -1)?;
                VoteOutcome::Removed
            }
            Some(prev) => {
                tx.prepare_cached(
                    "UPDATE post_votes SET direction = ?3, created_at = ?4
                     WHERE post_id = ?1 AND user_id = ?2",
                )
                .map_err(|e| Error::Database(e.to_string()))?
                .execute(params![post_id, user_id, dir, now_ms()])
                .map_err(|e| Error::Database(e.to_string()))?;
                Self::bump_counter(&tx, post_id, prev, -1)?;
                Self::bump_counter(&tx, post_id, dir, 1)?;
                VoteOutcome::Changed
            }
            None => {
                tx.prepare_cached(
                    "INSERT INTO post_votes (post_id, user_id, direction, created_at)
                     VALUES (?1, ?2, ?3, ?4)",
                )
                .map_err(|e| Error::Database(e.to_string()))?
                .execute(params![post_id, user_id, dir, now_ms()])
                .map_err(|e| Error::Database(e.to_string()))?;
                Self::bump_counter(&tx, post_id, dir, 1)?;
                VoteOutcome::Added
            }
        };

        tx.commit().map_err(|e| Error::Database(e.to_string()))?;
        Ok(outcome)
    }

    fn bump_counter(tx: &Transaction<'_>, post_id: i64, direction: i64, delta: i64) -> Result<()> {
        let column = if direction > 0 { "upvotes" } else { "downvotes" };
        let sql = format!("UPDATE posts SET {0} = {0} + ?1 WHERE id = ?2", column);
        tx.execute(&sql, params![delta, post_id])
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }

    // ---------------------------------------------------------------
    // Search
    // ---------------------------------------------------------------

    /// Naive term-match search over recent posts.
    ///
    /// Stands in for the external full-text search call: the baseline
    /// `relevance_score` is the fraction of query terms present in
    /// title+content. Re-ranking happens in the caller.
    pub fn search_posts(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let terms: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT id, title, content FROM posts
                 ORDER BY created_at DESC LIMIT ?1",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params![SEARCH_SCAN_LIMIT], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut hits: Vec<SearchHit> = Vec::new();
        for row in rows {
            let (id, title, content) = row.map_err(|e| Error::Database(e.to_string()))?;
            let haystack = format!("{} {}", title, content).to_lowercase();
            let matched = terms.iter().filter(|t| haystack.contains(t.as_str())).count();
            if matched > 0 {
                hits.push(SearchHit {
                    id,
                    title,
                    content,
                    relevance_score: matched as f64 / terms.len() as f64,
                });
            }
        }

        hits.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(limit);
        Ok(hits)
    }

    // ---------------------------------------------------------------
    // Karma ledger
    // ---------------------------------------------------------------

    /// Append one ledger row with the type's fixed point value. Rows are
    /// never updated or deleted.
    pub fn append_activity(&self, user_id: &str, activity_type: ActivityType) -> Result<i64> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "INSERT INTO karma_activities (user_id, activity_type, points, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        stmt.insert(params![
            user_id,
            activity_type.as_str(),
            activity_type.points(),
            now_ms()
        ])
        .map_err(|e| Error::Database(e.to_string()))
    }

    /// All ledger rows for a user, oldest first.
    pub fn activities_for_user(&self, user_id: &str) -> Result<Vec<KarmaActivity>> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "SELECT activity_type, points, created_at FROM karma_activities
                 WHERE user_id = ?1 ORDER BY created_at ASC, id ASC",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        let rows = stmt
            .query_map(params![user_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        let mut activities = Vec::new();
        for row in rows {
            let (type_str, points, created_at) = row.map_err(|e| Error::Database(e.to_string()))?;
            match ActivityType::parse(&type_str) {
                Some(activity_type) => activities.push(KarmaActivity {
                    activity_type,
                    points,
                    created_at,
                }),
                None => warn!("Skipping ledger row with unknown activity type {:?}", type_str),
            }
        }
        Ok(activities)
    }

    // ---------------------------------------------------------------
    // Analysis audit
    // ---------------------------------------------------------------

    /// Persist an audit copy of a sentiment result. Write-only history;
    /// nothing reads it back for correctness.
    pub fn record_analysis(
        &self,
        post_id: Option<i64>,
        result: &TextAnalysisResult,
    ) -> Result<i64> {
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(
                "INSERT INTO analysis_history (post_id, label, score, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .map_err(|e| Error::Database(e.to_string()))?;
        stmt.insert(params![post_id, result.label.as_str(), result.score, now_ms()])
            .map_err(|e| Error::Database(e.to_string()))
    }

    // ---------------------------------------------------------------
    // Stats
    // ---------------------------------------------------------------

    pub fn get_stats(&self) -> Result<StoreStats> {
        let conn = self.conn.lock();
        let count = |sql: &str| -> Result<i64> {
            conn.query_row(sql, [], |row| row.get(0))
                .map_err(|e| Error::Database(e.to_string()))
        };

        let db_size_mb = std::fs::metadata(&self.db_path)
            .map(|m| m.len() as f64 / (1024.0 * 1024.0))
            .unwrap_or(0.0);

        Ok(StoreStats {
            total_posts: count("SELECT COUNT(*) FROM posts")?,
            total_votes: count("SELECT COUNT(*) FROM post_votes")?,
            total_activities: count("SELECT COUNT(*) FROM karma_activities")?,
            analyses_recorded: count("SELECT COUNT(*) FROM analysis_history")?,
            db_path: self.db_path.display().to_string(),
            db_size_mb,
        })
    }
}

/// SHA-256 content hash used for post dedup.
pub fn content_hash(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use medpulse_text::analyze_sentiment;

    fn test_store() -> (SocialStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = SocialStore::open(dir.path()).unwrap();
        (store, dir)
    }

    fn sample_post(title: &str, content: &str) -> NewPost {
        NewPost {
            author_id: "dr-vega".into(),
            title: title.into(),
            content: content.into(),
            tags: vec!["cardiology".into()],
            created_at: None,
        }
    }

    #[test]
    fn test_add_and_get_post() {
        let (store, _dir) = test_store();
        let id = store
            .add_post(&sample_post("Case review", "Interesting cardiology case"))
            .unwrap();

        let post = store.get_post(id).unwrap().unwrap();
        assert_eq!(post.title, "Case review");
        assert_eq!(post.tags, vec!["cardiology"]);
        assert_eq!(post.upvotes, 0);
    }

    #[test]
    fn test_get_missing_post() {
        let (store, _dir) = test_store();
        assert!(store.get_post(999).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_post_rejected() {
        let (store, _dir) = test_store();
        store.add_post(&sample_post("Same", "Content")).unwrap();
        let err = store.add_post(&sample_post("Same", "Content")).unwrap_err();
        assert!(matches!(err, Error::DuplicateContent(_)));
    }

    #[test]
    fn test_empty_post_rejected() {
        let (store, _dir) = test_store();
        let err = store.add_post(&sample_post("", "Content")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_vote_toggle_cycle() {
        let (store, _dir) = test_store();
        let id = store.add_post(&sample_post("Votes", "Toggle me")).unwrap();

        // Up: added
        assert_eq!(
            store.toggle_vote(id, "u1", VoteDirection::Up).unwrap(),
            VoteOutcome::Added
        );
        assert_eq!(store.get_post(id).unwrap().unwrap().upvotes, 1);

        // Down: flipped
        assert_eq!(
            store.toggle_vote(id, "u1", VoteDirection::Down).unwrap(),
            VoteOutcome::Changed
        );
        let post = store.get_post(id).unwrap().unwrap();
        assert_eq!(post.upvotes, 0);
        assert_eq!(post.downvotes, 1);

        // Down again: withdrawn
        assert_eq!(
            store.toggle_vote(id, "u1", VoteDirection::Down).unwrap(),
            VoteOutcome::Removed
        );
        let post = store.get_post(id).unwrap().unwrap();
        assert_eq!(post.upvotes, 0);
        assert_eq!(post.downvotes, 0);
    }

    #[test]
    fn test_vote_on_missing_post() {
        let (store, _dir) = test_store();
        let err = store.toggle_vote(42, "u1", VoteDirection::Up).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_recent_posts_window() {
        let (store, _dir) = test_store();
        let mut old = sample_post("Old", "Ancient history");
        old.created_at = Some(now_ms() - 30 * 86_400_000);
        store.add_post(&old).unwrap();
        store.add_post(&sample_post("Fresh", "New case")).unwrap();

        let recent = store.recent_posts(7, 100).unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].title, "Fresh");
    }

    #[test]
    fn test_search_scores_by_term_fraction() {
        let (store, _dir) = test_store();
        store
            .add_post(&sample_post("Cardiac arrest management", "airway and compressions"))
            .unwrap();
        store
            .add_post(&sample_post("Hospital parking", "cardiac ward entrance"))
            .unwrap();

        let hits = store.search_posts("cardiac compressions", 10).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Cardiac arrest management");
        assert_eq!(hits[0].relevance_score, 1.0);
        assert_eq!(hits[1].relevance_score, 0.5);
    }

    #[test]
    fn test_search_empty_query() {
        let (store, _dir) = test_store();
        assert!(store.search_posts("   ", 10).unwrap().is_empty());
    }

    #[test]
    fn test_karma_ledger_append_and_read() {
        let (store, _dir) = test_store();
        store.append_activity("u1", ActivityType::CreatePost).unwrap();
        store.append_activity("u1", ActivityType::ReceiveUpvote).unwrap();
        store.append_activity("u2", ActivityType::GiveUpvote).unwrap();

        let ledger = store.activities_for_user("u1").unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger[0].activity_type, ActivityType::CreatePost);
        assert_eq!(ledger[0].points, 10);
        assert_eq!(medpulse_karma::total_karma(&ledger), 15);
    }

    #[test]
    fn test_record_analysis_counts_in_stats() {
        let (store, _dir) = test_store();
        let id = store.add_post(&sample_post("Audit", "treatment went well")).unwrap();
        let analysis = analyze_sentiment("treatment went well");
        store.record_analysis(Some(id), &analysis).unwrap();

        let stats = store.get_stats().unwrap();
        assert_eq!(stats.total_posts, 1);
        assert_eq!(stats.analyses_recorded, 1);
    }
}
