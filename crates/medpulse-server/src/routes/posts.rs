//! Post routes — creation with analysis audit, retrieval, vote toggling.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::warn;

use crate::state::AppState;
use medpulse_karma::ActivityType;
use medpulse_store::{NewPost, Post, VoteDirection, VoteOutcome};
use medpulse_text::analyze_sentiment;
use medpulse_trends::{extract_topics, PostRecord};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", post(create_post).get(list_posts))
        .route("/posts/{id}", get(get_post))
        .route("/posts/{id}/vote", post(vote_post))
}

fn post_to_record(post: &Post) -> PostRecord {
    PostRecord {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        upvotes: post.upvotes,
        downvotes: post.downvotes,
        tags: post.tags.clone(),
    }
}

fn post_json(post: &Post) -> serde_json::Value {
    serde_json::json!({
        "id": post.id,
        "authorId": post.author_id,
        "title": post.title,
        "content": post.content,
        "upvotes": post.upvotes,
        "downvotes": post.downvotes,
        "createdAt": post.created_at,
        "tags": post.tags,
    })
}

/// POST /api/posts — create a post, tag its topics, audit its sentiment,
/// and credit the author's ledger.
async fn create_post(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewPost>,
) -> impl IntoResponse {
    let post_id = match state.store.add_post(&req) {
        Ok(id) => id,
        Err(medpulse_core::Error::DuplicateContent(hash)) => {
            return (
                StatusCode::CONFLICT,
                Json(serde_json::json!({ "error": "Duplicate post", "contentHash": hash })),
            );
        }
        Err(medpulse_core::Error::InvalidInput(msg)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": msg })),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            );
        }
    };

    let record = PostRecord {
        id: post_id,
        title: req.title.clone(),
        content: req.content.clone(),
        upvotes: 0,
        downvotes: 0,
        tags: req.tags.clone(),
    };
    let topics = extract_topics(&record);
    let analysis = analyze_sentiment(&req.content);

    // Audit copy and ledger credit are best-effort; the post itself is in.
    if let Err(e) = state.store.record_analysis(Some(post_id), &analysis) {
        warn!("Failed to record analysis for post {}: {}", post_id, e);
    }
    if let Err(e) = state.store.append_activity(&req.author_id, ActivityType::CreatePost) {
        warn!("Failed to credit CREATE_POST for {}: {}", req.author_id, e);
    }
    state.invalidate_trending();

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "id": post_id,
            "topics": topics,
            "analysis": { "label": analysis.label, "score": analysis.score },
        })),
    )
}

#[derive(Deserialize)]
struct ListParams {
    days: Option<i64>,
    limit: Option<usize>,
}

/// GET /api/posts — recent posts, newest first.
async fn list_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> impl IntoResponse {
    let days = params.days.unwrap_or(state.config.trending_window_days);
    let limit = params.limit.unwrap_or(50);

    match state.store.recent_posts(days, limit) {
        Ok(posts) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "posts": posts.iter().map(post_json).collect::<Vec<_>>(),
                "total": posts.len(),
            })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}

/// GET /api/posts/{id}
async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.store.get_post(id) {
        Ok(Some(post)) => {
            let topics = extract_topics(&post_to_record(&post));
            let mut body = post_json(&post);
            body["topics"] = serde_json::json!(topics);
            (StatusCode::OK, Json(body))
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("post {} not found", id) })),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": e.to_string() })),
        ),
    }
}

#[derive(Deserialize)]
struct VoteRequest {
    user_id: String,
    direction: VoteDirection,
}

/// POST /api/posts/{id}/vote — toggle a vote.
///
/// Only a freshly added vote earns karma: the ledger is append-only, so
/// withdrawals and flips never claw points back.
async fn vote_post(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<VoteRequest>,
) -> impl IntoResponse {
    let outcome = match state.store.toggle_vote(id, &req.user_id, req.direction) {
        Ok(outcome) => outcome,
        Err(medpulse_core::Error::NotFound(msg)) => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": msg })),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            );
        }
    };

    if outcome == VoteOutcome::Added {
        credit_vote_karma(&state, id, &req.user_id, req.direction);
    }
    state.invalidate_trending();

    match state.store.get_post(id) {
        Ok(Some(post)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "outcome": outcome,
                "upvotes": post.upvotes,
                "downvotes": post.downvotes,
            })),
        ),
        _ => (
            StatusCode::OK,
            Json(serde_json::json!({ "outcome": outcome })),
        ),
    }
}

fn credit_vote_karma(state: &AppState, post_id: i64, voter_id: &str, direction: VoteDirection) {
    let author_id = match state.store.get_post(post_id) {
        Ok(Some(post)) => post.author_id,
        _ => return,
    };

    let ledger_writes = match direction {
        VoteDirection::Up => vec![
            (voter_id.to_string(), ActivityType::GiveUpvote),
            (author_id, ActivityType::ReceiveUpvote),
        ],
        VoteDirection::Down => vec![(author_id, ActivityType::ReceiveDownvote)],
    };

    for (user, activity) in &ledger_writes {
        if let Err(e) = state.store.append_activity(user, *activity) {
            warn!("Failed to append {:?} for {}: {}", activity, user, e);
        }
    }
}
