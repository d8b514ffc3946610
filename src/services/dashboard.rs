//! Inventory overview service

use std::collections::BTreeMap;

use crate::{
    error::AppResult,
    models::{
        dashboard::{Dashboard, EquipmentSummary, LocationInventory},
        equipment::EquipmentDetails,
        location::Location,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Equipment grouped under the location that holds it
    pub async fn summary(&self) -> AppResult<Dashboard> {
        let (equipment, locations) = tokio::try_join!(
            self.repository.equipment.list(),
            self.repository.locations.list()
        )?;
        Ok(build_dashboard(equipment, locations))
    }
}

fn build_dashboard(equipment: Vec<EquipmentDetails>, locations: Vec<Location>) -> Dashboard {
    let total_equipment = equipment.len();
    let mut by_location: BTreeMap<i32, Vec<EquipmentSummary>> = BTreeMap::new();
    for item in equipment {
        by_location
            .entry(item.location_id)
            .or_default()
            .push(EquipmentSummary {
                id: item.id,
                model: item.model,
                equipment_type: item.equipment_type,
            });
    }

    let locations = locations
        .into_iter()
        .map(|location| {
            let equipment = by_location.remove(&location.id).unwrap_or_default();
            LocationInventory {
                id: location.id,
                room_name: location.room_name,
                building_type: location.building_type,
                equipment_count: equipment.len(),
                equipment,
            }
        })
        .collect();

    // Whatever is left points at a location that does not exist
    let mut unassigned: Vec<EquipmentSummary> = by_location.into_values().flatten().collect();
    unassigned.sort_by_key(|e| e.id);

    Dashboard {
        total_equipment,
        locations,
        unassigned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::BuildingType;

    fn item(id: i32, location_id: i32) -> EquipmentDetails {
        EquipmentDetails {
            id,
            model: format!("Model {}", id),
            equipment_type: "Laptop".to_string(),
            location_id,
            room_name: None,
            building_type: None,
        }
    }

    fn location(id: i32, room_name: &str) -> Location {
        Location {
            id,
            room_name: room_name.to_string(),
            building_type: BuildingType::Classroom,
        }
    }

    #[test]
    fn test_groups_equipment_by_location() {
        let dashboard = build_dashboard(
            vec![item(1, 2), item(2, 1), item(3, 2), item(4, 9)],
            vec![location(2, "A 100"), location(1, "B 200"), location(3, "C 300")],
        );

        assert_eq!(dashboard.total_equipment, 4);
        let counts: Vec<(i32, usize)> = dashboard
            .locations
            .iter()
            .map(|l| (l.id, l.equipment_count))
            .collect();
        assert_eq!(counts, vec![(2, 2), (1, 1), (3, 0)]);
        let ids: Vec<i32> = dashboard.locations[0].equipment.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(dashboard.unassigned.len(), 1);
        assert_eq!(dashboard.unassigned[0].id, 4);
    }

    #[test]
    fn test_empty_inventory() {
        let dashboard = build_dashboard(Vec::new(), Vec::new());
        assert_eq!(dashboard.total_equipment, 0);
        assert!(dashboard.locations.is_empty());
        assert!(dashboard.unassigned.is_empty());
    }
}
