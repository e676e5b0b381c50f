//! Species listing and detail endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        species::{Category, FishSpeciesDto, PlantSpeciesDto, SpeciesSummaryDto},
    },
    server::{
        error::{species::SpeciesError, Error},
        model::app::AppState,
        service::species::SpeciesService,
    },
};

/// OpenAPI tag for the species endpoints
pub static SPECIES_TAG: &str = "species";

/// List all fish species sorted by name
#[utoipa::path(
    get,
    path = "/api/fishes",
    tag = SPECIES_TAG,
    responses(
        (status = 200, description = "Success when listing fish species", body = Vec<SpeciesSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_fishes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let species_service = SpeciesService::new(&state.db);

    let fishes = species_service.list(Category::Fish).await?;

    Ok((StatusCode::OK, axum::Json(fishes)))
}

/// Get the full record of a fish species by loosely matched name
#[utoipa::path(
    get,
    path = "/api/fish/{name}",
    tag = SPECIES_TAG,
    params(
        ("name" = String, Path, description = "Fish name, e.g. \"bettas\" or \"Neon Tetra\"")
    ),
    responses(
        (status = 200, description = "Success when a fish species matches", body = FishSpeciesDto),
        (status = 404, description = "Fish species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fish_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let species_service = SpeciesService::new(&state.db);

    let Some(fish) = species_service.find(Category::Fish, &name).await? else {
        return Err(SpeciesError::FishNotFound(name).into());
    };

    Ok((StatusCode::OK, axum::Json(fish)))
}

/// List all plant species sorted by name
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = SPECIES_TAG,
    responses(
        (status = 200, description = "Success when listing plant species", body = Vec<SpeciesSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_plants(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let species_service = SpeciesService::new(&state.db);

    let plants = species_service.list(Category::Plant).await?;

    Ok((StatusCode::OK, axum::Json(plants)))
}

/// Get the full record of a plant species by loosely matched name
#[utoipa::path(
    get,
    path = "/api/plant/{name}",
    tag = SPECIES_TAG,
    params(
        ("name" = String, Path, description = "Plant name, e.g. \"java fern\"")
    ),
    responses(
        (status = 200, description = "Success when a plant species matches", body = PlantSpeciesDto),
        (status = 404, description = "Plant species not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plant_detail(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let species_service = SpeciesService::new(&state.db);

    let Some(plant) = species_service.find(Category::Plant, &name).await? else {
        return Err(SpeciesError::PlantNotFound(name).into());
    };

    Ok((StatusCode::OK, axum::Json(plant)))
}
