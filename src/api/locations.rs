//! Location API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppResult, ErrorResponse},
    models::location::{CreateLocation, Location, UpdateLocation},
};

use super::{ApiJson, ApiPath, ApiResponse, ApiResult};

/// List all locations, ordered by room name
#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    responses(
        (status = 200, description = "Location list (envelope `data`)", body = [Location]),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn list_locations(State(state): State<crate::AppState>) -> ApiResult<Vec<Location>> {
    let locations = state.services.locations.list().await?;
    Ok(ApiResponse::ok(locations))
}

/// Get location by ID
#[utoipa::path(
    get,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Location (envelope `data`)", body = Location),
        (status = 404, description = "Location not found", body = ErrorResponse)
    )
)]
pub async fn get_location(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Location> {
    let location = state.services.locations.get_by_id(id).await?;
    Ok(ApiResponse::ok(location))
}

/// Create a location
#[utoipa::path(
    post,
    path = "/locations",
    tag = "locations",
    request_body = CreateLocation,
    responses(
        (status = 201, description = "Location created (envelope `data`)", body = Location),
        (status = 400, description = "Missing field or unknown building type", body = ErrorResponse)
    )
)]
pub async fn create_location(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<CreateLocation>,
) -> AppResult<(StatusCode, Json<ApiResponse<Location>>)> {
    let location = state.services.locations.create(&data).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(location)))
}

/// Update a location; omitted fields keep their value
#[utoipa::path(
    put,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i32, Path, description = "Location ID")),
    request_body = UpdateLocation,
    responses(
        (status = 200, description = "Location updated (envelope `data`)", body = Location),
        (status = 400, description = "Unknown building type", body = ErrorResponse),
        (status = 404, description = "Location not found", body = ErrorResponse)
    )
)]
pub async fn update_location(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<UpdateLocation>,
) -> ApiResult<Location> {
    let location = state.services.locations.update(id, &data).await?;
    Ok(ApiResponse::ok(location))
}

/// Delete a location that holds no equipment
#[utoipa::path(
    delete,
    path = "/locations/{id}",
    tag = "locations",
    params(("id" = i32, Path, description = "Location ID")),
    responses(
        (status = 200, description = "Deleted record (envelope `data`)", body = Location),
        (status = 400, description = "Location still contains equipment", body = ErrorResponse),
        (status = 404, description = "Location not found", body = ErrorResponse)
    )
)]
pub async fn delete_location(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Location> {
    let location = state.services.locations.delete(id).await?;
    Ok(ApiResponse::ok(location))
}
