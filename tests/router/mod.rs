//! Tests for the assembled application router.

use aquadex::server::router::app;
use aquadex_test_utils::prelude::*;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt;

use crate::util::{json_body, seeded_context, TestContextExt};

/// Expect search requests to be routed and answered with JSON
#[tokio::test]
async fn routes_search_request() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"query": "tank size for neon tetras"}"#))
        .unwrap();

    let resp = app(test.app_state()).oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(
        body["message"],
        "The minimum tank size for Neon Tetra is 20 gallons."
    );

    Ok(())
}

/// Expect a missing query field to be treated as an empty query
#[tokio::test]
async fn rejects_search_without_query_field() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let resp = app(test.app_state()).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect path names with spaces to be decoded
#[tokio::test]
async fn routes_detail_request_with_encoded_name() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let request = Request::builder()
        .uri("/api/fish/neon%20tetra")
        .body(Body::empty())
        .unwrap();

    let resp = app(test.app_state()).oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["name"], "Neon Tetra");

    Ok(())
}

/// Expect CORS headers allowing any origin
#[tokio::test]
async fn allows_any_origin() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let request = Request::builder()
        .uri("/api/plants")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let resp = app(test.app_state()).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    Ok(())
}

/// Expect the OpenAPI document to list every API route
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let request = Request::builder()
        .uri("/api/docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app(test.app_state()).oneshot(request).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    for path in [
        "/api/fishes",
        "/api/fish/{name}",
        "/api/plants",
        "/api/plant/{name}",
        "/api/search",
    ] {
        assert!(body["paths"].get(path).is_some(), "missing {}", path);
    }

    Ok(())
}
