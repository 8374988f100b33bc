//! Karma routes — recorded activities in, derived stats out.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;
use medpulse_karma::{user_karma_stats, ActivityType};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{user_id}/karma", get(get_karma))
        .route("/karma/activities", post(record_activity))
}

/// GET /api/users/{user_id}/karma — fold the ledger into displayed stats.
///
/// Nothing is stored for the rank itself; this recomputation is the only
/// "promotion" there is.
async fn get_karma(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    match state.store.activities_for_user(&user_id) {
        Ok(activities) => {
            let stats = user_karma_stats(&activities);
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "userId": user_id,
                    "totalKarma": stats.total_karma,
                    "rank": stats.rank,
                    "rankProgress": {
                        "current": stats.rank_progress.current,
                        "next": stats.rank_progress.next,
                        "progress": stats.rank_progress.progress,
                        "nextRank": stats.rank_progress.next_rank,
                    },
                    "activityCount": activities.len(),
                })),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}

#[derive(Deserialize)]
struct ActivityRequest {
    user_id: String,
    activity_type: ActivityType,
}

/// POST /api/karma/activities — append one ledger row.
async fn record_activity(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ActivityRequest>,
) -> impl IntoResponse {
    match state.store.append_activity(&req.user_id, req.activity_type) {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "id": id,
                "activityType": req.activity_type,
                "points": req.activity_type.points(),
            })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}
