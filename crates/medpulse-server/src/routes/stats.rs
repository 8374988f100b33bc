//! Health and storage statistics routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(get_health))
        .route("/stats", get(get_stats))
}

/// GET /api/health
async fn get_health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "medpulse",
        "port": state.config.port,
    }))
}

/// GET /api/stats — storage statistics.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let stats = state.store.get_stats().unwrap_or_else(|_| medpulse_store::StoreStats {
        total_posts: 0,
        total_votes: 0,
        total_activities: 0,
        analyses_recorded: 0,
        db_path: String::new(),
        db_size_mb: 0.0,
    });

    Json(serde_json::json!({
        "posts": stats.total_posts,
        "votes": stats.total_votes,
        "karmaActivities": stats.total_activities,
        "analysesRecorded": stats.analyses_recorded,
        "dbSizeMb": stats.db_size_mb,
        "trendingCacheWarm": state.trending_cache_warm(),
    }))
}
