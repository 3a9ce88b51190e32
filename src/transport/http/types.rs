use crate::app::sighting_service::SightingService;
use crate::error::RepositoryError;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

/// Shared handler state. The service is read-only after startup, so a plain
/// `Arc` is enough; no lock is held across requests.
#[derive(Clone)]
pub struct AppState {
    pub sightings: Arc<SightingService>,
}

/// Query parameters for `GET /sighting`.
#[derive(Deserialize, Debug, IntoParams)]
pub struct SightingDetailParams {
    /// Sighting id (integer).
    pub id: i32,
}

/// Query parameters for `GET /nearestSighting`. Names are fixed by the
/// front-end fetch calls.
#[derive(Deserialize, Debug, IntoParams)]
pub struct NearestSightingParams {
    #[serde(rename = "limitAmount")]
    pub limit_amount: i64,
    #[serde(rename = "userLat")]
    pub user_lat: f64,
    #[serde(rename = "userLon")]
    pub user_lon: f64,
}

/// Error body returned to clients. Internal failure detail is logged
/// server-side and never serialized here.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for RepositoryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RepositoryError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            RepositoryError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("no sighting with id {id}"))
            }
            RepositoryError::ConnectionFailure(_) | RepositoryError::QueryFailure(_) => {
                tracing::error!(error = %self, "repository failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub fn query_400(err: QueryRejection, expected: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: format!("Invalid query parameters: {} (expected: {})", err, expected),
        }),
    )
}
