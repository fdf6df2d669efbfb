//! Counter page handlers: render on GET, clap on POST.

use crate::error::AppError;
use crate::service::ClapCount;
use crate::state::AppState;
use crate::views::render_home;
use axum::extract::State;
use axum::response::{Html, Redirect};

pub const HOME_PATH: &str = "/";

/// GET / — counter page. Served from the page cache when possible.
#[utoipa::path(
    get,
    path = "/",
    tag = "starter",
    responses((status = 200, description = "Counter page", content_type = "text/html", body = String))
)]
pub async fn home(State(state): State<AppState>) -> Html<String> {
    if let Some(html) = state.cache.get(HOME_PATH) {
        return Html(html);
    }
    let generation = state.cache.generation();
    let count = state.counter.current().await;
    let html = render_home(count);
    if let ClapCount::Known(_) = count {
        state.cache.put_if_current(HOME_PATH, generation, html.clone());
    }
    Html(html)
}

/// POST / — record one clap, then send the browser back to the page.
#[utoipa::path(
    post,
    path = "/",
    tag = "starter",
    responses(
        (status = 303, description = "Clap recorded (or skipped while the count is unavailable); redirects to /"),
        (status = 500, description = "Writing the counter failed", body = crate::error::ErrorBody)
    )
)]
pub async fn clap(State(state): State<AppState>) -> Result<Redirect, AppError> {
    if state.counter.increment().await?.is_some() {
        state.cache.invalidate(HOME_PATH);
    }
    Ok(Redirect::to(HOME_PATH))
}
