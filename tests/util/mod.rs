//! Shared helpers for integration tests.

use aquadex::server::{model::app::AppState, seed::seed_sample_data};
use aquadex_test_utils::prelude::*;
use axum::response::Response;
use http_body_util::BodyExt;

/// Builds a test database containing the sample species
pub async fn seeded_context() -> Result<TestContext, TestError> {
    let test = TestBuilder::new().with_species_tables().build().await?;
    seed_sample_data(&test.db).await.unwrap();

    Ok(test)
}

/// Extension methods for [`TestContext`] used by the integration tests
pub trait TestContextExt {
    fn app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Collects a response body and parses it as JSON
pub async fn json_body(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    serde_json::from_slice(&bytes).unwrap()
}
