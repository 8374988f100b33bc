//! Trending topics route with demo-data fallback.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::warn;

use crate::demo::demo_trending_topics;
use crate::state::AppState;
use medpulse_trends::{analyze_trending_topics, PostRecord, TrendingTopic};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/trending", get(get_trending))
}

fn topics_json(topics: &[TrendingTopic], cached: bool, fallback: bool) -> serde_json::Value {
    serde_json::json!({
        "topics": topics
            .iter()
            .map(|t| serde_json::json!({
                "topic": t.topic,
                "mentions": t.mentions,
                "sentiment": t.sentiment,
                "growthRate": t.growth_rate,
                "relatedPosts": t.related_posts,
            }))
            .collect::<Vec<_>>(),
        "cached": cached,
        "fallback": fallback,
    })
}

/// GET /api/trending — top topics over the configured window.
///
/// A failed window fetch serves the fixed demo dataset instead of erroring;
/// the feed always shows something.
async fn get_trending(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    if let Some(topics) = state.cached_trending() {
        return Json(topics_json(&topics, true, false));
    }

    let window = state
        .store
        .recent_posts(state.config.trending_window_days, state.config.trending_post_cap);

    match window {
        Ok(posts) => {
            let records: Vec<PostRecord> = posts
                .iter()
                .map(|p| PostRecord {
                    id: p.id,
                    title: p.title.clone(),
                    content: p.content.clone(),
                    upvotes: p.upvotes,
                    downvotes: p.downvotes,
                    tags: p.tags.clone(),
                })
                .collect();
            let topics = analyze_trending_topics(&records);
            state.cache_trending(&topics);
            Json(topics_json(&topics, false, false))
        }
        Err(e) => {
            warn!("Trending window fetch failed, serving demo data: {}", e);
            Json(topics_json(&demo_trending_topics(), false, true))
        }
    }
}
