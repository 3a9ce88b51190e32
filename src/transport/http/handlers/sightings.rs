use crate::domain::sighting::{NearestSighting, Sighting, SightingSummary};
use crate::transport::http::types::{
    query_400, AppState, ErrorBody, NearestSightingParams, SightingDetailParams,
};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

#[utoipa::path(
    get,
    path = "/sightings",
    responses(
        (status = 200, description = "De-duplicated sighting markers", body = [SightingSummary]),
        (status = 500, description = "Store unavailable or query failed", body = ErrorBody)
    )
)]
pub async fn list_sightings_handler(State(state): State<AppState>) -> Response {
    match state.sightings.list_sightings().await {
        Ok(sightings) => Json(sightings).into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/sighting",
    params(SightingDetailParams),
    responses(
        (status = 200, description = "Full sighting detail", body = Sighting),
        (status = 400, description = "Malformed or non-numeric id", body = ErrorBody),
        (status = 404, description = "No sighting with that id", body = ErrorBody),
        (status = 500, description = "Store unavailable or query failed", body = ErrorBody)
    )
)]
pub async fn get_sighting_handler(
    State(state): State<AppState>,
    params: Result<Query<SightingDetailParams>, QueryRejection>,
) -> Response {
    // Non-numeric ids are rejected here; nothing unparsed ever reaches the query.
    let Query(params) = match params {
        Ok(p) => p,
        Err(err) => return query_400(err, "?id=<int>").into_response(),
    };

    match state.sightings.get_sighting(params.id).await {
        Ok(sighting) => Json(sighting).into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/nearestSighting",
    params(NearestSightingParams),
    responses(
        (status = 200, description = "Closest coordinate groups, ascending by distance (nm)", body = [NearestSighting]),
        (status = 400, description = "Non-positive limit or out-of-range coordinates", body = ErrorBody),
        (status = 500, description = "Store unavailable or query failed", body = ErrorBody)
    )
)]
pub async fn nearest_sighting_handler(
    State(state): State<AppState>,
    params: Result<Query<NearestSightingParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(err) => {
            return query_400(err, "?limitAmount=<int>&userLat=<float>&userLon=<float>")
                .into_response()
        }
    };

    match state
        .sightings
        .find_closest_sightings(params.limit_amount, params.user_lat, params.user_lon)
        .await
    {
        Ok(nearest) => Json(nearest).into_response(),
        Err(err) => err.into_response(),
    }
}
