//! Table bootstrap for an empty database

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

// equipment.location_id is a logical reference; no FOREIGN KEY is declared
const STATEMENTS: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS locations (
        id SERIAL PRIMARY KEY,
        room_name TEXT NOT NULL,
        building_type TEXT NOT NULL
            CHECK (building_type IN ('Warehouse', 'Classroom', 'Office'))
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS equipment (
        id SERIAL PRIMARY KEY,
        model TEXT NOT NULL,
        equipment_type TEXT NOT NULL,
        location_id INTEGER NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS equipment_location_id_idx ON equipment (location_id)",
];

/// Create the `locations` and `equipment` tables if they do not exist
pub async fn init(pool: &Pool<Postgres>) -> AppResult<()> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("Database schema ready");
    Ok(())
}
