//! Errors of the species lookup and search endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected requests and failed direct lookups.
#[derive(Error, Debug)]
pub enum SpeciesError {
    /// Search query is empty after trimming
    #[error("Please enter a search query.")]
    EmptyQuery,
    /// No fish matched the requested name
    #[error("Fish species not found.")]
    FishNotFound(String),
    /// No plant matched the requested name
    #[error("Plant species not found.")]
    PlantNotFound(String),
}

impl SpeciesError {
    fn error_response(status: StatusCode, message: String) -> Response {
        (status, Json(ErrorDto { error: message })).into_response()
    }
}

impl IntoResponse for SpeciesError {
    fn into_response(self) -> Response {
        match self {
            Self::EmptyQuery => {
                tracing::debug!("Rejected empty search query");

                Self::error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::FishNotFound(ref name) | Self::PlantNotFound(ref name) => {
                tracing::debug!(name = %name, "{}", self);

                Self::error_response(StatusCode::NOT_FOUND, self.to_string())
            }
        }
    }
}
