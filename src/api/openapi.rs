//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{dashboard, equipment, health, locations};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "1.0.0",
        description = "Equipment and location tracking REST API. Every JSON response \
                       is wrapped as `{ success, data?, message? }`."
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::transfer_equipment,
        // Locations
        locations::list_locations,
        locations::get_location,
        locations::create_location,
        locations::update_location,
        locations::delete_location,
        // Dashboard
        dashboard::get_dashboard,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentDetails,
            crate::models::equipment::EquipmentRequest,
            crate::models::equipment::TransferEquipment,
            // Locations
            crate::models::location::Location,
            crate::models::location::BuildingType,
            crate::models::location::CreateLocation,
            crate::models::location::UpdateLocation,
            // Dashboard
            crate::models::dashboard::Dashboard,
            crate::models::dashboard::LocationInventory,
            crate::models::dashboard::EquipmentSummary,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment management"),
        (name = "locations", description = "Location management"),
        (name = "dashboard", description = "Inventory overview")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
