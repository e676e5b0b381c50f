//! Tests for the free-text search endpoint.

use aquadex::{model::search::SearchRequestDto, server::controller::search::search};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use super::*;

fn request(query: &str) -> Json<SearchRequestDto> {
    Json(SearchRequestDto {
        query: query.to_string(),
    })
}

/// Expect 200 OK with the fish record and a diet answer
#[tokio::test]
async fn answers_fish_question() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let result = search(State(test.app_state()), request("what is the diet of guppies")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["type"], "fish_species");
    assert_eq!(body["data"]["name"], "Guppy");
    assert_eq!(
        body["message"],
        "Guppy are Omnivore (flakes, brine shrimp, daphnia)."
    );

    Ok(())
}

/// Expect 200 OK with the plant record and its description
#[tokio::test]
async fn answers_plant_question() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let resp = search(State(test.app_state()), request("tell me about Java Fern"))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["type"], "plant_species");
    assert_eq!(body["data"]["placement"], "Midground/Attached to decor");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Java Fern: A hardy and easy-to-care-for plant"));

    Ok(())
}

/// Expect 200 OK with an error-type answer and null data for an unknown name
#[tokio::test]
async fn answers_unknown_name() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let resp = search(State(test.app_state()), request("xyzzy habitat"))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["type"], "error");
    assert!(body["data"].is_null());
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("I couldn't find information for"));

    Ok(())
}

/// Expect 400 Bad Request for an empty query
#[tokio::test]
async fn rejects_empty_query() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let result = search(State(test.app_state()), request("")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": "Please enter a search query." })
    );

    Ok(())
}
