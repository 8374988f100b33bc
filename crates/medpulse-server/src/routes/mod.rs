//! HTTP route handlers, one module per concern.

pub mod analysis;
pub mod karma;
pub mod posts;
pub mod search;
pub mod stats;
pub mod trending;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(stats::routes())
        .merge(posts::routes())
        .merge(analysis::routes())
        .merge(trending::routes())
        .merge(search::routes())
        .merge(karma::routes())
}
