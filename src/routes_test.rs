use axum::http::header::LOCATION;
use axum::response::IntoResponse;

use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn root_redirects_to_blog() {
    let response = redirect_root().await.into_response();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/blog");
}
