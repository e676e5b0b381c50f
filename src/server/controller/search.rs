//! Free-text search endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        search::{SearchRequestDto, SearchResponseDto},
    },
    server::{error::Error, model::app::AppState, service::search::SearchService},
};

/// OpenAPI tag for the search endpoint
pub static SEARCH_TAG: &str = "search";

/// Answer a natural language question about a fish or plant species
///
/// Queries naming no known species still succeed, with `type` set to `error`.
#[utoipa::path(
    post,
    path = "/api/search",
    tag = SEARCH_TAG,
    request_body = SearchRequestDto,
    responses(
        (status = 200, description = "Answer to the query", body = SearchResponseDto),
        (status = 400, description = "Query is empty", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let search_service = SearchService::new(&state.db);

    let response = search_service.search(&request.query).await?;

    Ok((StatusCode::OK, Json(response)))
}
