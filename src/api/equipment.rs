//! Equipment API endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::{AppResult, ErrorResponse},
    models::equipment::{Equipment, EquipmentDetails, EquipmentRequest, TransferEquipment},
};

use super::{ApiJson, ApiPath, ApiResponse, ApiResult};

/// List all equipment joined with location details
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list, ordered by id (envelope `data`)", body = [EquipmentDetails]),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
) -> ApiResult<Vec<EquipmentDetails>> {
    let equipment = state.services.equipment.list().await?;
    Ok(ApiResponse::ok(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details (envelope `data`)", body = EquipmentDetails),
        (status = 404, description = "Equipment not found", body = ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<EquipmentDetails> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(ApiResponse::ok(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = EquipmentRequest,
    responses(
        (status = 201, description = "Equipment created (envelope `data`)", body = Equipment),
        (status = 400, description = "Missing field", body = ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<EquipmentRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Equipment>>)> {
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok(equipment)))
}

/// Replace equipment fields
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = EquipmentRequest,
    responses(
        (status = 200, description = "Equipment updated (envelope `data`)", body = Equipment),
        (status = 400, description = "Missing field", body = ErrorResponse),
        (status = 404, description = "Equipment not found", body = ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<EquipmentRequest>,
) -> ApiResult<Equipment> {
    let equipment = state.services.equipment.update(id, &data).await?;
    Ok(ApiResponse::ok(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Deleted record (envelope `data`)", body = Equipment),
        (status = 404, description = "Equipment not found", body = ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Equipment> {
    let equipment = state.services.equipment.delete(id).await?;
    Ok(ApiResponse::ok(equipment))
}

/// Move equipment to another location
#[utoipa::path(
    put,
    path = "/equipment/{id}/transfer",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = TransferEquipment,
    responses(
        (status = 200, description = "Equipment transferred (envelope `data`)", body = Equipment),
        (status = 400, description = "Missing location_id", body = ErrorResponse),
        (status = 404, description = "Equipment not found", body = ErrorResponse)
    )
)]
pub async fn transfer_equipment(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(data): ApiJson<TransferEquipment>,
) -> ApiResult<Equipment> {
    let equipment = state.services.equipment.transfer(id, &data).await?;
    Ok(ApiResponse::ok(equipment))
}
