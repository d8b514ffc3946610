//! Equipment repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{Equipment, EquipmentDetails, NewEquipment},
};

pub(crate) fn equipment_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Equipment {} not found", id))
}

/// Storage operations on equipment
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    /// Every equipment row, left-joined with its location, ordered by id
    async fn list(&self) -> AppResult<Vec<EquipmentDetails>>;

    async fn get_by_id(&self, id: i32) -> AppResult<EquipmentDetails>;

    async fn create(&self, data: &NewEquipment) -> AppResult<Equipment>;

    /// Replace all fields of an existing row
    async fn update(&self, id: i32, data: &NewEquipment) -> AppResult<Equipment>;

    /// Point an existing row at another location, nothing else changes
    async fn transfer(&self, id: i32, location_id: i32) -> AppResult<Equipment>;

    async fn delete(&self, id: i32) -> AppResult<Equipment>;
}

#[derive(Clone)]
pub struct PgEquipmentRepository {
    pool: Pool<Postgres>,
}

impl PgEquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

const SELECT_DETAILS: &str = r#"
    SELECT e.id, e.model, e.equipment_type, e.location_id, l.room_name, l.building_type
    FROM equipment e
    LEFT JOIN locations l ON e.location_id = l.id
"#;

#[async_trait]
impl EquipmentRepository for PgEquipmentRepository {
    async fn list(&self) -> AppResult<Vec<EquipmentDetails>> {
        let query = format!("{} ORDER BY e.id", SELECT_DETAILS);
        let rows = sqlx::query_as::<_, EquipmentDetails>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<EquipmentDetails> {
        let query = format!("{} WHERE e.id = $1", SELECT_DETAILS);
        sqlx::query_as::<_, EquipmentDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| equipment_not_found(id))
    }

    async fn create(&self, data: &NewEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (model, equipment_type, location_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.model)
        .bind(&data.equipment_type)
        .bind(data.location_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, data: &NewEquipment) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipment
            SET model = $1, equipment_type = $2, location_id = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&data.model)
        .bind(&data.equipment_type)
        .bind(data.location_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| equipment_not_found(id))
    }

    async fn transfer(&self, id: i32, location_id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            "UPDATE equipment SET location_id = $1 WHERE id = $2 RETURNING *",
        )
        .bind(location_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| equipment_not_found(id))
    }

    async fn delete(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("DELETE FROM equipment WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| equipment_not_found(id))
    }
}
