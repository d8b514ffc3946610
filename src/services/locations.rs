//! Locations service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::location::{parse_building_type, CreateLocation, Location, LocationChanges, UpdateLocation},
    repository::Repository,
};

#[derive(Clone)]
pub struct LocationsService {
    repository: Repository,
}

impl LocationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Location>> {
        self.repository.locations.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Location> {
        self.repository.locations.get_by_id(id).await
    }

    /// Create a location; both fields are required
    pub async fn create(&self, data: &CreateLocation) -> AppResult<Location> {
        data.validate()?;
        let (Some(room_name), Some(building_type)) = (&data.room_name, &data.building_type) else {
            return Err(AppError::Validation(
                "Room name and building type are required".to_string(),
            ));
        };
        let building_type = parse_building_type(building_type)?;

        let location = self.repository.locations.create(room_name, building_type).await?;
        tracing::info!(location_id = location.id, "Location created");
        Ok(location)
    }

    /// Update the supplied fields of a location
    pub async fn update(&self, id: i32, data: &UpdateLocation) -> AppResult<Location> {
        let changes = LocationChanges {
            room_name: data.room_name.clone(),
            building_type: data
                .building_type
                .as_deref()
                .map(parse_building_type)
                .transpose()?,
        };

        let location = self.repository.locations.update(id, &changes).await?;
        tracing::info!(location_id = id, "Location updated");
        Ok(location)
    }

    /// Delete a location (fails while equipment is still assigned to it)
    pub async fn delete(&self, id: i32) -> AppResult<Location> {
        match self.repository.locations.delete(id).await {
            Ok(location) => {
                tracing::info!(location_id = id, "Location deleted");
                Ok(location)
            }
            Err(AppError::Conflict(msg)) => {
                tracing::warn!(location_id = id, "Refused to delete location in use");
                Err(AppError::Conflict(msg))
            }
            Err(e) => Err(e),
        }
    }
}
