//! Text analysis routes — sentiment, readability, summary, insights.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;
use medpulse_text::{
    analyze_sentiment, calculate_readability, create_medical_summary, extract_medical_terms,
    lookup_insights,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze/sentiment", post(sentiment))
        .route("/analyze/readability", post(readability))
        .route("/analyze/summary", post(summary))
        .route("/insights", get(insights))
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    text: String,
}

/// POST /api/analyze/sentiment
async fn sentiment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Json<serde_json::Value> {
    let result = analyze_sentiment(&req.text);

    // Ad-hoc analyses are audited too, just without a post id.
    if let Err(e) = state.store.record_analysis(None, &result) {
        tracing::warn!("Failed to record ad-hoc analysis: {}", e);
    }

    Json(serde_json::json!({
        "label": result.label,
        "score": result.score,
    }))
}

/// POST /api/analyze/readability
async fn readability(Json(req): Json<AnalyzeRequest>) -> Json<serde_json::Value> {
    let score = calculate_readability(&req.text);
    let terms = extract_medical_terms(&req.text);

    Json(serde_json::json!({
        "readability": score,
        "medicalTerms": terms,
    }))
}

/// POST /api/analyze/summary
async fn summary(Json(req): Json<AnalyzeRequest>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "summary": create_medical_summary(&req.text),
    }))
}

#[derive(Deserialize)]
struct InsightParams {
    q: String,
}

/// GET /api/insights?q=...
async fn insights(Query(params): Query<InsightParams>) -> Json<serde_json::Value> {
    let insights = lookup_insights(&params.q);
    let total = insights.len();
    Json(serde_json::json!({
        "query": params.q,
        "insights": insights,
        "total": total,
    }))
}
