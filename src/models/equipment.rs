//! Equipment model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::location::BuildingType;

/// Equipment record as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    /// Model name, e.g. "Dell XPS 15"
    pub model: String,
    /// Category, e.g. "Laptop"
    pub equipment_type: String,
    pub location_id: i32,
}

/// Equipment joined with its location's display fields.
/// `room_name` and `building_type` are null when `location_id` is dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentDetails {
    pub id: i32,
    pub model: String,
    pub equipment_type: String,
    pub location_id: i32,
    pub room_name: Option<String>,
    pub building_type: Option<BuildingType>,
}

/// Create or replace equipment request.
///
/// The validation rules apply to create; a replace only needs every field present.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct EquipmentRequest {
    #[validate(
        required(message = "Model, equipment type, and location are required"),
        length(min = 1, message = "Model, equipment type, and location are required")
    )]
    pub model: Option<String>,
    #[validate(
        required(message = "Model, equipment type, and location are required"),
        length(min = 1, message = "Model, equipment type, and location are required")
    )]
    pub equipment_type: Option<String>,
    #[validate(
        required(message = "Model, equipment type, and location are required"),
        range(min = 1, message = "Model, equipment type, and location are required")
    )]
    pub location_id: Option<i32>,
}

/// Transfer request: move equipment to another location
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct TransferEquipment {
    #[validate(
        required(message = "Location ID is required"),
        range(min = 1, message = "Location ID is required")
    )]
    pub location_id: Option<i32>,
}

/// Validated equipment fields handed to the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewEquipment {
    pub model: String,
    pub equipment_type: String,
    pub location_id: i32,
}

impl EquipmentRequest {
    /// The three fields as given, or None when any is absent or null.
    /// Empty strings and zero ids pass through unchecked.
    pub fn fields(&self) -> Option<NewEquipment> {
        Some(NewEquipment {
            model: self.model.clone()?,
            equipment_type: self.equipment_type.clone()?,
            location_id: self.location_id?,
        })
    }
}

impl TryFrom<&EquipmentRequest> for NewEquipment {
    type Error = crate::error::AppError;

    fn try_from(data: &EquipmentRequest) -> Result<Self, Self::Error> {
        data.validate()?;
        data.fields().ok_or_else(|| {
            crate::error::AppError::Validation(
                "Model, equipment type, and location are required".to_string(),
            )
        })
    }
}

impl Equipment {
    /// Attach location display fields (None when the reference is dangling)
    pub fn with_location(self, location: Option<&super::location::Location>) -> EquipmentDetails {
        EquipmentDetails {
            id: self.id,
            model: self.model,
            equipment_type: self.equipment_type,
            location_id: self.location_id,
            room_name: location.map(|l| l.room_name.clone()),
            building_type: location.map(|l| l.building_type),
        }
    }
}
