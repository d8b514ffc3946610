//! Repository layer for database operations

pub mod equipment;
pub mod locations;
pub mod memory;
pub mod schema;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

pub use equipment::{EquipmentRepository, PgEquipmentRepository};
pub use locations::{LocationRepository, PgLocationsRepository};
pub use memory::MemoryStore;

/// Main repository struct holding the location and equipment stores
#[derive(Clone)]
pub struct Repository {
    pool: Option<Pool<Postgres>>,
    pub locations: Arc<dyn LocationRepository>,
    pub equipment: Arc<dyn EquipmentRepository>,
}

impl Repository {
    /// Create a PostgreSQL-backed repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            locations: Arc::new(PgLocationsRepository::new(pool.clone())),
            equipment: Arc::new(PgEquipmentRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Create a repository backed by a fresh in-process store
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self {
            pool: None,
            locations: Arc::new(store.clone()),
            equipment: Arc::new(store),
        }
    }

    /// Assemble a repository from arbitrary store implementations
    pub fn from_parts(
        locations: Arc<dyn LocationRepository>,
        equipment: Arc<dyn EquipmentRepository>,
    ) -> Self {
        Self {
            pool: None,
            locations,
            equipment,
        }
    }

    /// Round trip to the backing store
    pub async fn ping(&self) -> AppResult<()> {
        if let Some(pool) = &self.pool {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}
