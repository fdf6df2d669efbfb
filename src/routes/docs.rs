//! Documentation routes: GET /openapi.json, GET /reference.

use crate::docs::OPENAPI_PATH;
use crate::handlers::reference::{openapi_json, reference};
use axum::{routing::get, Router};

pub fn docs_routes() -> Router {
    Router::new()
        .route(OPENAPI_PATH, get(openapi_json))
        .route("/reference", get(reference))
}
