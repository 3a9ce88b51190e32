use crate::domain::sighting::{NearestSighting, Sighting, SightingSummary};
use crate::transport::http::handlers::{health, sightings};
use crate::transport::http::types::ErrorBody;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        sightings::list_sightings_handler,
        sightings::get_sighting_handler,
        sightings::nearest_sighting_handler
    ),
    components(schemas(Sighting, SightingSummary, NearestSighting, ErrorBody))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/sightings", get(sightings::list_sightings_handler))
        .route("/sighting", get(sightings::get_sighting_handler))
        .route("/nearestSighting", get(sightings::nearest_sighting_handler))
        .route("/health", get(health::healthcheck_handler))
        // The Leaflet front-end; ServeDir answers 404 for unknown paths itself.
        .fallback_service(ServeDir::new("public"))
        .with_state(app_state)
}
