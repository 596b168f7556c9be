use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

async fn status_of(uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    base_routes().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(status_of("/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    assert_eq!(status_of("/api/products").await, StatusCode::NOT_FOUND);
}
