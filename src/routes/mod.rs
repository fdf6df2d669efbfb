pub mod common;
pub mod docs;
pub mod starter;

pub use common::common_routes_with_ready;
pub use docs::docs_routes;
pub use starter::starter_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Every route the starter server exposes, with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(starter_routes(state.clone()))
        .merge(docs_routes())
        .merge(common_routes_with_ready(state))
        .layer(TraceLayer::new_for_http())
}
