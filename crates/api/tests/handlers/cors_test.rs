use std::{collections::HashMap, sync::Arc};

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use openhours_api::{app_with_config, config::ApiConfig};
use pretty_assertions::assert_eq;

use crate::test_utils::TestContext;

async fn server_with_cors(origins: Option<&str>) -> (TestContext, TestServer) {
    let mut vars = HashMap::new();
    if let Some(origins) = origins {
        vars.insert("API_CORS_ORIGINS".to_string(), origins.to_string());
    }
    let config = ApiConfig::from_vars(|key| vars.get(key).cloned()).unwrap();

    let ctx = TestContext::seeded().await;
    let server = TestServer::new(app_with_config(Arc::new(ctx.state()), &config)).unwrap();
    (ctx, server)
}

async fn allowed_origin(server: &TestServer, origin: &'static str) -> Option<HeaderValue> {
    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static(origin))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .cloned()
}

#[tokio::test]
async fn test_wildcard_allows_any_origin() {
    let (_ctx, server) = server_with_cors(Some("*")).await;

    let allowed = allowed_origin(&server, "https://anywhere.example").await;

    assert_eq!(allowed, Some(HeaderValue::from_static("*")));
}

#[tokio::test]
async fn test_listed_origin_is_allowed() {
    let (_ctx, server) =
        server_with_cors(Some("http://localhost:5173, https://openhours.example")).await;

    let allowed = allowed_origin(&server, "https://openhours.example").await;

    assert_eq!(allowed, Some(HeaderValue::from_static("https://openhours.example")));
}

#[tokio::test]
async fn test_unlisted_origin_is_not_allowed() {
    let (_ctx, server) = server_with_cors(Some("http://localhost:5173")).await;

    let allowed = allowed_origin(&server, "https://evil.example").await;

    assert_eq!(allowed, None);
}

#[test_log::test(tokio::test)]
async fn test_invalid_origin_entries_are_skipped() {
    let (_ctx, server) = server_with_cors(Some("bad\u{7f}origin,http://localhost:5173")).await;

    let allowed = allowed_origin(&server, "http://localhost:5173").await;

    assert_eq!(allowed, Some(HeaderValue::from_static("http://localhost:5173")));
}

#[tokio::test]
async fn test_no_cors_layer_without_origins() {
    let (_ctx, server) = server_with_cors(None).await;

    let allowed = allowed_origin(&server, "http://localhost:5173").await;

    assert_eq!(allowed, None);
}
