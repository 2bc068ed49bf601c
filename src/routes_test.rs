use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("folio").build()
}

async fn status_of(router: Router, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap().status()
}

// =============================================================================
// healthz
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn probe_routes_serve_healthz() {
    assert_eq!(status_of(probe_routes(), "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn probe_routes_reject_unknown_paths() {
    assert_eq!(status_of(probe_routes(), "/nope").await, StatusCode::NOT_FOUND);
}

// =============================================================================
// full app
// =============================================================================

#[tokio::test]
async fn app_serves_healthz_alongside_page_routes() {
    let router = app(test_options(), MotionConfig::default());
    assert_eq!(status_of(router, "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn app_missing_bundle_file_is_not_found() {
    let router = app(test_options(), MotionConfig::default());
    assert_eq!(status_of(router, "/pkg/does-not-exist.wasm").await, StatusCode::NOT_FOUND);
}
