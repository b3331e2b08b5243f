use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router: one wildcard GET route (plus the bare root,
/// which the wildcard does not match). No other methods are recognized.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handler::serve_blob))
        .route("/*path", get(handler::serve_blob))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
