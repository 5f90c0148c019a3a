use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn test_site() -> Router {
    site(Router::new(), Path::new("target/__routes_test_missing_site__"))
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = test_site()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_static_path_falls_through_to_not_found() {
    let response = test_site()
        .oneshot(Request::builder().uri("/pkg/missing.wasm").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn page_routes_are_merged() {
    let pages = Router::new().route("/", get(|| async { "home" }));
    let response = site(pages, Path::new("target/__routes_test_missing_site__"))
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
