//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with all endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/fishes` - List fish species
/// - `GET /api/fish/{name}` - Get a fish species by name
/// - `GET /api/plants` - List plant species
/// - `GET /api/plant/{name}` - Get a plant species by name
/// - `POST /api/search` - Answer a natural language query
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Aquadex", description = "Aquadex API"), tags(
        (name = controller::species::SPECIES_TAG, description = "Fish and plant species lookups"),
        (name = controller::search::SEARCH_TAG, description = "Natural language species search"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::species::get_all_fishes))
        .routes(routes!(controller::species::get_fish_detail))
        .routes(routes!(controller::species::get_all_plants))
        .routes(routes!(controller::species::get_plant_detail))
        .routes(routes!(controller::search::search))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application: API routes, permissive CORS and request tracing.
///
/// # Example
/// ```ignore
/// let app = router::app(AppState::from(db));
/// axum::serve(listener, app).await?;
/// ```
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
