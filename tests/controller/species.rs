//! Tests for the species listing and detail endpoints.

use aquadex::server::controller::species::{
    get_all_fishes, get_all_plants, get_fish_detail, get_plant_detail,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use super::*;

/// Expect 200 OK with fish summaries sorted by name
#[tokio::test]
async fn lists_fishes_sorted_by_name() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let result = get_all_fishes(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Betta Fish", "Guppy", "Neon Tetra"]);

    Ok(())
}

/// Expect listing entries to expose only id, name, description and image
#[tokio::test]
async fn lists_only_summary_fields() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let resp = get_all_plants(State(test.app_state()))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let first = body[0].as_object().unwrap();

    let mut keys: Vec<&str> = first.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["description", "id", "image_url", "name"]);
    assert_eq!(first["name"], "Anacharis");

    Ok(())
}

/// Expect 200 OK with an empty list when no species are stored
#[tokio::test]
async fn lists_empty_table() -> Result<(), TestError> {
    let test = TestBuilder::new().with_species_tables().build().await?;

    let resp = get_all_fishes(State(test.app_state()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!([]));

    Ok(())
}

/// Expect 500 Internal Server Error when the species tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_all_plants(State(test.app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": "Internal server error" })
    );

    Ok(())
}

/// Expect 200 OK with the full fish record when the stored name carries the category word
#[tokio::test]
async fn gets_fish_detail_with_suffix_completion() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let result = get_fish_detail(State(test.app_state()), Path("betta".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["name"], "Betta Fish");
    assert_eq!(body["min_tank_size_gal"], 5);
    assert_eq!(body["habitat_ph"], "6.5-7.5");

    Ok(())
}

/// Expect 200 OK with the singular record for a plural name
#[tokio::test]
async fn gets_fish_detail_for_plural_name() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let result = get_fish_detail(State(test.app_state()), Path("neon tetras".to_string())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["name"], "Neon Tetra");

    Ok(())
}

/// Expect 404 Not Found for a plural whose singular is not stored as is
#[tokio::test]
async fn fish_detail_not_found_for_plural_of_suffixed_name() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let result = get_fish_detail(State(test.app_state()), Path("bettas".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found for an unknown fish
#[tokio::test]
async fn fish_detail_not_found() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let result = get_fish_detail(State(test.app_state()), Path("Java Fern".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": "Fish species not found." })
    );

    Ok(())
}

/// Expect 200 OK with the full plant record regardless of letter case
#[tokio::test]
async fn gets_plant_detail_ignoring_case() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let result = get_plant_detail(State(test.app_state()), Path("JAVA FERN".to_string())).await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["name"], "Java Fern");
    assert_eq!(body["care_level"], "Easy");

    Ok(())
}

/// Expect 404 Not Found for an unknown plant
#[tokio::test]
async fn plant_detail_not_found() -> Result<(), TestError> {
    let test = seeded_context().await?;

    let result = get_plant_detail(State(test.app_state()), Path("xyzzy".to_string())).await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(resp).await,
        json!({ "error": "Plant species not found." })
    );

    Ok(())
}
