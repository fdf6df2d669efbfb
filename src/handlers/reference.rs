//! Documentation handlers: OpenAPI document and the API reference page.

use crate::docs::color_scheme::PREFERS_COLOR_SCHEME_HEADER;
use crate::docs::{render_reference_page, ApiReferenceConfig, MediaQueryEvent, ThemeConfig};
use crate::openapi::ApiDoc;
use axum::http::header::{HeaderName, VARY};
use axum::http::HeaderMap;
use axum::response::Html;
use axum::Json;
use utoipa::OpenApi;

pub const ACCEPT_CH: HeaderName = HeaderName::from_static("accept-ch");
pub const CRITICAL_CH: HeaderName = HeaderName::from_static("critical-ch");

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /reference — dark mode follows the `Sec-CH-Prefers-Color-Scheme` client hint.
/// The response asks for the hint (`Accept-CH`), makes the first load retry with it
/// (`Critical-CH`) and keys caches on it (`Vary`).
pub async fn reference(headers: HeaderMap) -> ([(HeaderName, &'static str); 3], Html<String>) {
    let event = MediaQueryEvent::from_headers(&headers);
    let config = ApiReferenceConfig::new(event.matches);
    (
        [
            (ACCEPT_CH, PREFERS_COLOR_SCHEME_HEADER),
            (CRITICAL_CH, PREFERS_COLOR_SCHEME_HEADER),
            (VARY, PREFERS_COLOR_SCHEME_HEADER),
        ],
        Html(render_reference_page(&ThemeConfig::default(), &config)),
    )
}
