//! Inventory overview model

use serde::Serialize;
use utoipa::ToSchema;

use super::location::BuildingType;

/// Short equipment entry shown under a location
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct EquipmentSummary {
    pub id: i32,
    pub model: String,
    pub equipment_type: String,
}

/// A location and the equipment it currently holds
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LocationInventory {
    pub id: i32,
    pub room_name: String,
    pub building_type: BuildingType,
    pub equipment_count: usize,
    pub equipment: Vec<EquipmentSummary>,
}

/// Whole-inventory overview
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Dashboard {
    pub total_equipment: usize,
    pub locations: Vec<LocationInventory>,
    /// Equipment whose location no longer exists
    pub unassigned: Vec<EquipmentSummary>,
}
