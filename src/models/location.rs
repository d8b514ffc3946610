//! Location model

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use validator::Validate;

/// Kind of building a location belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BuildingType {
    Warehouse,
    Classroom,
    Office,
}

impl BuildingType {
    pub const ALL: [BuildingType; 3] = [
        BuildingType::Warehouse,
        BuildingType::Classroom,
        BuildingType::Office,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingType::Warehouse => "Warehouse",
            BuildingType::Classroom => "Classroom",
            BuildingType::Office => "Office",
        }
    }
}

impl std::fmt::Display for BuildingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BuildingType {
    type Err = String;

    /// Exact, case-sensitive match on the stored literal
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Warehouse" => Ok(BuildingType::Warehouse),
            "Classroom" => Ok(BuildingType::Classroom),
            "Office" => Ok(BuildingType::Office),
            _ => Err(format!("Invalid building type: {}", s)),
        }
    }
}

// SQLx conversion for BuildingType (stored as TEXT)
impl sqlx::Type<Postgres> for BuildingType {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for BuildingType {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&'r str as Decode<'r, Postgres>>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for BuildingType {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        <&str as Encode<Postgres>>::encode(self.as_str(), buf)
    }
}

/// Location record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Location {
    pub id: i32,
    /// Room label, e.g. "HON 4015B"
    pub room_name: String,
    pub building_type: BuildingType,
}

/// Create location request
///
/// `building_type` stays a string here so an unknown literal is reported
/// as a validation error rather than a body decoding failure.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateLocation {
    #[validate(
        required(message = "Room name and building type are required"),
        length(min = 1, message = "Room name and building type are required")
    )]
    pub room_name: Option<String>,
    #[validate(
        required(message = "Room name and building type are required"),
        length(min = 1, message = "Room name and building type are required")
    )]
    pub building_type: Option<String>,
}

/// Update location request; absent fields are left untouched.
/// Only `building_type` is checked, against the three literals.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateLocation {
    pub room_name: Option<String>,
    pub building_type: Option<String>,
}

/// Validated location changes handed to the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationChanges {
    pub room_name: Option<String>,
    pub building_type: Option<BuildingType>,
}

/// Parse a building type literal, with the message shown to API callers
pub fn parse_building_type(value: &str) -> Result<BuildingType, crate::error::AppError> {
    value.parse().map_err(|_| {
        crate::error::AppError::Validation(
            "Building type must be Warehouse, Classroom, or Office".to_string(),
        )
    })
}
