//! The counter page: GET / renders, POST / claps.

use crate::handlers::page::{clap, home, HOME_PATH};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::limit::RequestBodyLimitLayer;

/// The clap form carries no fields; anything bigger is refused.
const FORM_BODY_LIMIT: usize = 1024;

pub fn starter_routes(state: AppState) -> Router {
    Router::new()
        .route(HOME_PATH, get(home).post(clap))
        .layer(RequestBodyLimitLayer::new(FORM_BODY_LIMIT))
        .with_state(state)
}
