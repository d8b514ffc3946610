//! Inventory overview endpoint

use axum::extract::State;

use crate::{error::ErrorResponse, models::dashboard::Dashboard};

use super::{ApiResponse, ApiResult};

/// Equipment grouped by location, plus equipment with a dangling location
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Inventory overview (envelope `data`)", body = Dashboard),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn get_dashboard(State(state): State<crate::AppState>) -> ApiResult<Dashboard> {
    let dashboard = state.services.dashboard.summary().await?;
    Ok(ApiResponse::ok(dashboard))
}
