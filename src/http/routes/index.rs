use axum::{extract::State, routing::get, Router};

use crate::http::route_not_found;
use crate::http::state::AppState;

/// GET / - plain-text liveness banner.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(banner).fallback(route_not_found))
}

async fn banner(State(state): State<AppState>) -> &'static str {
    state.profile().banner
}
