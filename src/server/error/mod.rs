//! Error types for the Aquadex server application.
//!
//! Domain errors live in their own modules and are aggregated by [`Error`]. All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for their `Display`
//! and `Error` implementations.

pub mod config;
pub mod species;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, species::SpeciesError},
};

/// Main error type for the Aquadex server application.
///
/// Aggregates domain-specific errors and library errors so handlers and services can
/// propagate everything with `?`. Not finding a species during a free-text search is not an
/// error; it is answered with an error-type search response instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Rejected request or missing species on a direct lookup.
    #[error(transparent)]
    SpeciesError(#[from] SpeciesError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Empty search query
/// - 404 Not Found - Species not found on a direct lookup
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::SpeciesError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
