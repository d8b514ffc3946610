//! In-process store backing both repositories.
//!
//! Mirrors the PostgreSQL schema: ids come from per-table sequences and
//! equipment keeps a plain `location_id` with no constraint behind it, so
//! dangling references behave the same way on both backends.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    equipment::{equipment_not_found, EquipmentRepository},
    locations::{location_in_use, location_not_found, LocationRepository},
};
use crate::{
    error::AppResult,
    models::{
        equipment::{Equipment, EquipmentDetails, NewEquipment},
        location::{BuildingType, Location, LocationChanges},
    },
};

#[derive(Default)]
struct MemoryState {
    locations: BTreeMap<i32, Location>,
    equipment: BTreeMap<i32, Equipment>,
    location_seq: i32,
    equipment_seq: i32,
}

impl MemoryState {
    fn details(&self, equipment: &Equipment) -> EquipmentDetails {
        equipment
            .clone()
            .with_location(self.locations.get(&equipment.location_id))
    }

    fn count_equipment(&self, location_id: i32) -> usize {
        self.equipment
            .values()
            .filter(|e| e.location_id == location_id)
            .count()
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Location>> {
        let state = self.state.read().await;
        let mut rows: Vec<Location> = state.locations.values().cloned().collect();
        // Byte order, not a collation: "Annex" < "HON" < "annex"
        rows.sort_by(|a, b| a.room_name.cmp(&b.room_name).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Location> {
        let state = self.state.read().await;
        state
            .locations
            .get(&id)
            .cloned()
            .ok_or_else(|| location_not_found(id))
    }

    async fn create(&self, room_name: &str, building_type: BuildingType) -> AppResult<Location> {
        let mut state = self.state.write().await;
        state.location_seq += 1;
        let location = Location {
            id: state.location_seq,
            room_name: room_name.to_string(),
            building_type,
        };
        state.locations.insert(location.id, location.clone());
        Ok(location)
    }

    async fn update(&self, id: i32, changes: &LocationChanges) -> AppResult<Location> {
        let mut state = self.state.write().await;
        let location = state
            .locations
            .get_mut(&id)
            .ok_or_else(|| location_not_found(id))?;
        if let Some(room_name) = &changes.room_name {
            location.room_name = room_name.clone();
        }
        if let Some(building_type) = changes.building_type {
            location.building_type = building_type;
        }
        Ok(location.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<Location> {
        let mut state = self.state.write().await;
        if state.count_equipment(id) > 0 {
            return Err(location_in_use());
        }
        state
            .locations
            .remove(&id)
            .ok_or_else(|| location_not_found(id))
    }
}

#[async_trait]
impl EquipmentRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<EquipmentDetails>> {
        let state = self.state.read().await;
        Ok(state.equipment.values().map(|e| state.details(e)).collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<EquipmentDetails> {
        let state = self.state.read().await;
        state
            .equipment
            .get(&id)
            .map(|e| state.details(e))
            .ok_or_else(|| equipment_not_found(id))
    }

    async fn create(&self, data: &NewEquipment) -> AppResult<Equipment> {
        let mut state = self.state.write().await;
        state.equipment_seq += 1;
        let equipment = Equipment {
            id: state.equipment_seq,
            model: data.model.clone(),
            equipment_type: data.equipment_type.clone(),
            location_id: data.location_id,
        };
        state.equipment.insert(equipment.id, equipment.clone());
        Ok(equipment)
    }

    async fn update(&self, id: i32, data: &NewEquipment) -> AppResult<Equipment> {
        let mut state = self.state.write().await;
        let equipment = state
            .equipment
            .get_mut(&id)
            .ok_or_else(|| equipment_not_found(id))?;
        equipment.model = data.model.clone();
        equipment.equipment_type = data.equipment_type.clone();
        equipment.location_id = data.location_id;
        Ok(equipment.clone())
    }

    async fn transfer(&self, id: i32, location_id: i32) -> AppResult<Equipment> {
        let mut state = self.state.write().await;
        let equipment = state
            .equipment
            .get_mut(&id)
            .ok_or_else(|| equipment_not_found(id))?;
        equipment.location_id = location_id;
        Ok(equipment.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<Equipment> {
        let mut state = self.state.write().await;
        state
            .equipment
            .remove(&id)
            .ok_or_else(|| equipment_not_found(id))
    }
}
