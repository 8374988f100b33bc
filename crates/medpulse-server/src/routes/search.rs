//! Search route — expand, fetch candidates, re-rank, with demo fallback.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::warn;

use crate::demo::demo_search_results;
use crate::state::AppState;
use medpulse_search::{analyze_query, rank_results, RankedResult, SearchCandidate};

/// Candidates requested from the store per search.
const SEARCH_LIMIT: usize = 20;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/search", get(search))
}

#[derive(Deserialize)]
struct SearchParams {
    q: String,
}

fn results_json(
    query: &str,
    expanded: &str,
    medical_terms: &[String],
    results: &[RankedResult],
    fallback: bool,
) -> serde_json::Value {
    serde_json::json!({
        "query": query,
        "expandedQuery": expanded,
        "medicalTerms": medical_terms,
        "results": results
            .iter()
            .map(|r| serde_json::json!({
                "id": r.id,
                "title": r.title,
                "content": r.content,
                "relevanceScore": r.relevance_score,
                "aiRelevanceScore": r.ai_relevance_score,
            }))
            .collect::<Vec<_>>(),
        "total": results.len(),
        "fallback": fallback,
    })
}

/// GET /api/search?q=...
///
/// The query is synonym-expanded, candidates come from the store's naive
/// full-text stand-in, and the medical-term boost re-ranks them. A failed
/// fetch serves the fixed demo result set.
async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Json<serde_json::Value> {
    let analysis = analyze_query(&params.q);

    match state.store.search_posts(&analysis.expanded, SEARCH_LIMIT) {
        Ok(hits) => {
            let candidates: Vec<SearchCandidate> = hits
                .into_iter()
                .map(|h| SearchCandidate {
                    id: h.id,
                    title: h.title,
                    content: h.content,
                    relevance_score: h.relevance_score,
                })
                .collect();
            let results = rank_results(candidates, &analysis.medical_terms);
            Json(results_json(
                &params.q,
                &analysis.expanded,
                &analysis.medical_terms,
                &results,
                false,
            ))
        }
        Err(e) => {
            warn!("Search fetch failed, serving demo data: {}", e);
            Json(results_json(
                &params.q,
                &analysis.expanded,
                &analysis.medical_terms,
                &demo_search_results(),
                true,
            ))
        }
    }
}
