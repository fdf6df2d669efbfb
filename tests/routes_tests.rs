use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use prezel_starter::{
    app, connect, ensure_tables, AppError, AppState, ClapCounter, ClapStore, Settings, SqlClapStore,
};
use sqlx::AnyPool;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tower::ServiceExt;

async fn memory_pool() -> AnyPool {
    let settings = Settings::from_lookup(|name| (name == "PREZEL_DB_URL").then(|| "sqlite::memory:".to_string()))
        .expect("settings");
    let pool = connect(&settings.db).await.expect("connect");
    ensure_tables(&pool).await.expect("tables");
    pool
}

async fn test_state() -> AppState {
    AppState::new(memory_pool().await)
}

/// Store whose first fetch reports back and then waits to be released.
struct GatedStore {
    inner: SqlClapStore,
    gate: Mutex<Option<(oneshot::Sender<()>, oneshot::Receiver<()>)>>,
}

#[async_trait::async_trait]
impl ClapStore for GatedStore {
    async fn fetch(&self, id: i64) -> Result<Option<i64>, AppError> {
        let count = self.inner.fetch(id).await?;
        let gate = self.gate.lock().unwrap().take();
        if let Some((reached, release)) = gate {
            let _ = reached.send(());
            let _ = release.await;
        }
        Ok(count)
    }

    async fn upsert(&self, id: i64, count: i64) -> Result<(), AppError> {
        self.inner.upsert(id, count).await
    }
}

async fn body_string(router: Router, req: Request<Body>) -> (StatusCode, String) {
    let res = router.oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_clap() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn page_shows_zero_claps_initially() {
    let state = test_state().await;
    let (status, html) = body_string(app(state), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("0 claps so far!"));
}

#[tokio::test]
async fn clap_redirects_and_invalidates_page() {
    let state = test_state().await;
    let router = app(state.clone());

    let (_, html) = body_string(router.clone(), get("/")).await;
    assert!(html.contains("0 claps so far!"));
    assert!(state.cache.get("/").is_some());

    let res = router.clone().oneshot(post_clap()).await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[header::LOCATION], "/");
    assert!(state.cache.get("/").is_none());

    let (_, html) = body_string(router, get("/")).await;
    assert!(html.contains("1 claps so far!"));
}

#[tokio::test]
async fn render_overtaken_by_clap_is_not_cached() {
    let pool = memory_pool().await;
    let (reached_tx, reached_rx) = oneshot::channel();
    let (release_tx, release_rx) = oneshot::channel();
    let store = GatedStore {
        inner: SqlClapStore::new(pool.clone()),
        gate: Mutex::new(Some((reached_tx, release_rx))),
    };
    let state = AppState::with_counter(pool, ClapCounter::new(Arc::new(store)));
    let router = app(state.clone());

    // GET reads 0 and stalls before rendering
    let pending_get = tokio::spawn(body_string(router.clone(), get("/")));
    reached_rx.await.unwrap();

    let res = router.clone().oneshot(post_clap()).await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    release_tx.send(()).unwrap();
    let (_, html) = pending_get.await.unwrap();
    assert!(html.contains("0 claps so far!"));
    assert!(state.cache.get("/").is_none());

    let (_, html) = body_string(router, get("/")).await;
    assert!(html.contains("1 claps so far!"));
}

#[tokio::test]
async fn unavailable_database_renders_without_count() {
    let state = test_state().await;
    state.pool.close().await;
    let router = app(state.clone());

    let (status, html) = body_string(router.clone(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("claps so far"));
    assert!(state.cache.get("/").is_none());

    let res = router.clone().oneshot(post_clap()).await.unwrap();
    assert_eq!(res.status(), StatusCode::SEE_OTHER);

    let (status, _) = body_string(router, get("/ready")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn oversized_form_is_rejected() {
    let state = test_state().await;
    let req = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_LENGTH, "4096")
        .body(Body::from(vec![b'a'; 4096]))
        .unwrap();
    let res = app(state).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let state = test_state().await;
    let (status, body) = body_string(app(state), get("/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["paths"]["/"]["post"].is_object());
    assert!(json["paths"]["/version"]["get"].is_object());
}

#[tokio::test]
async fn reference_page_follows_color_scheme_hint() {
    let state = test_state().await;
    let router = app(state);

    let req = Request::builder()
        .uri("/reference")
        .header("Sec-CH-Prefers-Color-Scheme", "dark")
        .body(Body::empty())
        .unwrap();
    let (status, html) = body_string(router.clone(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("&quot;darkMode&quot;:true"));
    assert!(html.contains(r#"style="display: none""#));
    assert!(html.contains(r#"<footer id="api">"#));

    let (_, html) = body_string(router, get("/reference")).await;
    assert!(html.contains("&quot;darkMode&quot;:false"));
}

#[tokio::test]
async fn reference_page_requests_color_scheme_hint() {
    let state = test_state().await;
    let res = app(state).oneshot(get("/reference")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let headers = res.headers();
    assert_eq!(headers["accept-ch"], "sec-ch-prefers-color-scheme");
    assert_eq!(headers["critical-ch"], "sec-ch-prefers-color-scheme");
    assert_eq!(headers[header::VARY], "sec-ch-prefers-color-scheme");
}

#[tokio::test]
async fn reference_page_loads_viewer() {
    let state = test_state().await;
    let (_, html) = body_string(app(state), get("/reference")).await;
    assert!(html.contains(r#"<script src="https://cdn.jsdelivr.net/npm/@scalar/api-reference"></script>"#));
    assert!(html.contains(r#"data-url="/openapi.json""#));
}

#[tokio::test]
async fn health_and_version() {
    let state = test_state().await;
    let router = app(state);
    let (status, body) = body_string(router.clone(), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"ok"}"#);
    let (_, body) = body_string(router, get("/version")).await;
    assert!(body.contains("prezel-starter"));
}
