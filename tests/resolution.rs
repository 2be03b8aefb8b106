//! Request resolution through the router, without a socket.
//!
//! Raw request targets like `/v1/../../v1/sample` would be normalized by an
//! HTTP client, so these tests drive the router directly.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use showmock::MockConfig;
use tower::ServiceExt;

mod common;

async fn send(host: &str, method: &str, target: &str) -> Response {
    send_with(common::fixture_config(), host, method, target).await
}

async fn send_with(config: MockConfig, host: &str, method: &str, target: &str) -> Response {
    let router = common::build_server(config).router();
    let request = Request::builder()
        .method(method)
        .uri(target)
        .header(header::HOST, host)
        .header(header::ACCEPT, "*/*")
        .body(Body::empty())
        .unwrap();

    router.oneshot(request).await.unwrap()
}

async fn body(res: Response) -> Vec<u8> {
    axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_traversal_is_clamped_to_domain_root() {
    let res = send("api.example.com", "GET", "/v1/../../../../v1/sample").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body(res).await, br#"{"sample":"v1"}"#);
}

#[tokio::test]
async fn test_encoded_traversal_is_clamped() {
    let res = send("api.example.com", "GET", "/%2e%2e/%2e%2e/v1/sample").await;
    assert_eq!(res.status(), StatusCode::OK);

    // would be <data>/default/GET/hello if `..` escaped the method directory
    let res = send("api.example.com", "GET", "/%2e%2e/%2e%2e/default/GET/hello").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_directory_serves_index() {
    let res = send("api.example.com", "GET", "/v1/").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body(res).await, br#"{"versions":["v1"]}"#);
}

#[tokio::test]
async fn test_missing_file_has_empty_body() {
    let res = send("api.example.com", "GET", "/v3/nothing").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.headers()["x-mock-domain"], "api.example.com");
    assert!(body(res).await.is_empty());
}

#[tokio::test]
async fn test_metadata_file_visibility() {
    let res = send("static.example.com", "GET", "/_meta.yml").await;
    // method-free domains expose every file under the root, metadata included
    assert_eq!(res.status(), StatusCode::OK);

    let res = send("api.example.com", "GET", "/../_meta.yml").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let res = send("api.example.com", "GET", "/v1/sample").await;
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_lower_case_method_config_serves_requests() {
    let mut config = common::fixture_config();
    config.mock.methods = vec!["get".into(), "post".into()];

    let res = send_with(config.clone(), "api.example.com", "GET", "/v1/sample").await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = send_with(config, "api.example.com", "PUT", "/v1/sample").await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()[header::ALLOW], "GET, POST");
}
