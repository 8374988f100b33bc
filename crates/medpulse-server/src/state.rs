//! Shared application state.

use medpulse_core::{now_ms, MedPulseConfig};
use medpulse_store::SocialStore;
use medpulse_trends::TrendingTopic;
use parking_lot::RwLock;

/// How long a trending computation is served before recomputing.
const TRENDING_CACHE_TTL_MS: i64 = 5 * 60 * 1000;

struct TrendingCache {
    computed_at: i64,
    topics: Vec<TrendingTopic>,
}

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: MedPulseConfig,
    pub store: SocialStore,
    trending_cache: RwLock<Option<TrendingCache>>,
}

impl AppState {
    pub fn new(config: MedPulseConfig, store: SocialStore) -> Self {
        Self {
            config,
            store,
            trending_cache: RwLock::new(None),
        }
    }

    /// Cached trending topics, if still fresh.
    pub fn cached_trending(&self) -> Option<Vec<TrendingTopic>> {
        let cache = self.trending_cache.read();
        cache
            .as_ref()
            .filter(|c| now_ms() - c.computed_at < TRENDING_CACHE_TTL_MS)
            .map(|c| c.topics.clone())
    }

    pub fn cache_trending(&self, topics: &[TrendingTopic]) {
        *self.trending_cache.write() = Some(TrendingCache {
            computed_at: now_ms(),
            topics: topics.to_vec(),
        });
    }

    /// Drop the cache so the next read recomputes (e.g., after a new post).
    pub fn invalidate_trending(&self) {
        *self.trending_cache.write() = None;
    }

    pub fn trending_cache_warm(&self) -> bool {
        self.cached_trending().is_some()
    }
}
