//! Equipment service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{Equipment, EquipmentDetails, EquipmentRequest, NewEquipment, TransferEquipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all equipment with location display fields
    pub async fn list(&self) -> AppResult<Vec<EquipmentDetails>> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<EquipmentDetails> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Create equipment. The location id is stored as given, it is not
    /// checked against existing locations.
    pub async fn create(&self, data: &EquipmentRequest) -> AppResult<Equipment> {
        let data = NewEquipment::try_from(data)?;
        let equipment = self.repository.equipment.create(&data).await?;
        tracing::info!(
            equipment_id = equipment.id,
            location_id = equipment.location_id,
            "Equipment created"
        );
        Ok(equipment)
    }

    /// Replace every field of an equipment item.
    /// Values are written as given; only an absent field is refused, since
    /// the columns are NOT NULL. An unknown id is reported before that.
    pub async fn update(&self, id: i32, data: &EquipmentRequest) -> AppResult<Equipment> {
        let Some(data) = data.fields() else {
            self.repository.equipment.get_by_id(id).await?;
            return Err(AppError::Validation(
                "Model, equipment type, and location are required".to_string(),
            ));
        };
        let equipment = self.repository.equipment.update(id, &data).await?;
        tracing::info!(equipment_id = id, "Equipment updated");
        Ok(equipment)
    }

    /// Move equipment to another location
    pub async fn transfer(&self, id: i32, data: &TransferEquipment) -> AppResult<Equipment> {
        data.validate()?;
        let location_id = data
            .location_id
            .ok_or_else(|| AppError::Validation("Location ID is required".to_string()))?;

        let equipment = self.repository.equipment.transfer(id, location_id).await?;
        tracing::info!(equipment_id = id, location_id, "Equipment transferred");
        Ok(equipment)
    }

    pub async fn delete(&self, id: i32) -> AppResult<Equipment> {
        let equipment = self.repository.equipment.delete(id).await?;
        tracing::info!(equipment_id = id, "Equipment deleted");
        Ok(equipment)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repository::{equipment::MockEquipmentRepository, locations::MockLocationRepository};

    fn service(mock: MockEquipmentRepository) -> EquipmentService {
        EquipmentService::new(Repository::from_parts(
            Arc::new(MockLocationRepository::new()),
            Arc::new(mock),
        ))
    }

    fn request(model: &str, equipment_type: &str, location_id: Option<i32>) -> EquipmentRequest {
        EquipmentRequest {
            model: Some(model.to_string()),
            equipment_type: Some(equipment_type.to_string()),
            location_id,
        }
    }

    #[tokio::test]
    async fn test_create_requires_every_field() {
        let service = service(MockEquipmentRepository::new());
        for data in [
            request("", "Laptop", Some(1)),
            request("Dell XPS 15", "", Some(1)),
            request("Dell XPS 15", "Laptop", None),
        ] {
            let err = service.create(&data).await.unwrap_err();
            match err {
                AppError::Validation(msg) => {
                    assert_eq!(msg, "Model, equipment type, and location are required")
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_create_does_not_check_location_exists() {
        let mut mock = MockEquipmentRepository::new();
        mock.expect_create().times(1).returning(|data| {
            Ok(Equipment {
                id: 1,
                model: data.model.clone(),
                equipment_type: data.equipment_type.clone(),
                location_id: data.location_id,
            })
        });

        let equipment = service(mock)
            .create(&request("Dell XPS 15", "Laptop", Some(404)))
            .await
            .unwrap();
        assert_eq!(equipment.location_id, 404);
    }

    #[tokio::test]
    async fn test_update_writes_empty_values() {
        let mut mock = MockEquipmentRepository::new();
        mock.expect_update()
            .withf(|id, data| *id == 1 && data.model.is_empty() && data.location_id == 0)
            .times(1)
            .returning(|id, data| {
                Ok(Equipment {
                    id,
                    model: data.model.clone(),
                    equipment_type: data.equipment_type.clone(),
                    location_id: data.location_id,
                })
            });

        let equipment = service(mock)
            .update(1, &request("", "Laptop", Some(0)))
            .await
            .unwrap();
        assert_eq!(equipment.model, "");
        assert_eq!(equipment.location_id, 0);
    }

    #[tokio::test]
    async fn test_update_missing_fields_on_unknown_id_is_not_found() {
        let mut mock = MockEquipmentRepository::new();
        mock.expect_get_by_id()
            .times(1)
            .returning(|id| Err(crate::repository::equipment::equipment_not_found(id)));

        let err = service(mock)
            .update(999, &EquipmentRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_missing_fields_on_existing_id_is_rejected() {
        let mut mock = MockEquipmentRepository::new();
        mock.expect_get_by_id().times(1).returning(|id| {
            Ok(EquipmentDetails {
                id,
                model: "Dell XPS 15".to_string(),
                equipment_type: "Laptop".to_string(),
                location_id: 1,
                room_name: None,
                building_type: None,
            })
        });

        let err = service(mock)
            .update(1, &request("Dell XPS 15", "Laptop", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_transfer_requires_location() {
        let service = service(MockEquipmentRepository::new());
        let err = service
            .transfer(1, &TransferEquipment { location_id: None })
            .await
            .unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Location ID is required"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transfer_passes_only_location() {
        let mut mock = MockEquipmentRepository::new();
        mock.expect_transfer()
            .withf(|id, location_id| *id == 5 && *location_id == 2)
            .times(1)
            .returning(|id, location_id| {
                Ok(Equipment {
                    id,
                    model: "Epson X41".to_string(),
                    equipment_type: "Projector".to_string(),
                    location_id,
                })
            });

        let equipment = service(mock)
            .transfer(5, &TransferEquipment { location_id: Some(2) })
            .await
            .unwrap();
        assert_eq!(equipment.location_id, 2);
    }

    #[tokio::test]
    async fn test_store_failure_is_propagated() {
        let mut mock = MockEquipmentRepository::new();
        mock.expect_list()
            .times(1)
            .returning(|| Err(AppError::Database(sqlx::Error::PoolTimedOut)));

        let err = service(mock).list().await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
