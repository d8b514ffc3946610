//! Locations repository

use async_trait::async_trait;
use sqlx::{PgConnection, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::location::{BuildingType, Location, LocationChanges},
};

pub(crate) fn location_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Location {} not found", id))
}

pub(crate) fn location_in_use() -> AppError {
    AppError::Conflict("Cannot delete location that contains equipment".to_string())
}

/// Why a conditional delete removed nothing, given the equipment still
/// referencing the location
fn undeleted_reason(id: i32, remaining: i64) -> AppError {
    if remaining > 0 {
        location_in_use()
    } else {
        location_not_found(id)
    }
}

/// Storage operations on locations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// All locations ordered by room name, then id.
    /// Name order follows the backend: PostgreSQL uses the database
    /// collation, the memory store compares bytes.
    async fn list(&self) -> AppResult<Vec<Location>>;

    async fn get_by_id(&self, id: i32) -> AppResult<Location>;

    async fn create(&self, room_name: &str, building_type: BuildingType) -> AppResult<Location>;

    /// Apply the supplied fields, leaving the others as they are
    async fn update(&self, id: i32, changes: &LocationChanges) -> AppResult<Location>;

    /// Delete a location no equipment refers to; `Conflict` otherwise
    async fn delete(&self, id: i32) -> AppResult<Location>;
}

#[derive(Clone)]
pub struct PgLocationsRepository {
    pool: Pool<Postgres>,
}

impl PgLocationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn count_equipment(conn: &mut PgConnection, id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE location_id = $1")
            .bind(id)
            .fetch_one(conn)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl LocationRepository for PgLocationsRepository {
    async fn list(&self) -> AppResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY room_name, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Location> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| location_not_found(id))
    }

    async fn create(&self, room_name: &str, building_type: BuildingType) -> AppResult<Location> {
        let row = sqlx::query_as::<_, Location>(
            "INSERT INTO locations (room_name, building_type) VALUES ($1, $2) RETURNING *",
        )
        .bind(room_name)
        .bind(building_type)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, changes: &LocationChanges) -> AppResult<Location> {
        sqlx::query_as::<_, Location>(
            r#"
            UPDATE locations
            SET room_name = COALESCE($1, room_name),
                building_type = COALESCE($2, building_type)
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(changes.room_name.as_deref())
        .bind(changes.building_type)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| location_not_found(id))
    }

    async fn delete(&self, id: i32) -> AppResult<Location> {
        let mut tx = self.pool.begin().await?;

        if Self::count_equipment(&mut tx, id).await? > 0 {
            return Err(location_in_use());
        }

        // Reference check repeated inside the delete statement itself
        let deleted = sqlx::query_as::<_, Location>(
            r#"
            DELETE FROM locations
            WHERE id = $1
              AND NOT EXISTS (SELECT 1 FROM equipment WHERE location_id = $1)
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        // Zero rows: either the id is gone or equipment arrived after the
        // first count. Count again to report which.
        let Some(location) = deleted else {
            let remaining = Self::count_equipment(&mut tx, id).await?;
            return Err(undeleted_reason(id, remaining));
        };
        tx.commit().await?;
        Ok(location)
    }
}
