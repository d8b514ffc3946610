//! Data models for the inventory server

pub mod dashboard;
pub mod equipment;
pub mod location;

// Re-export commonly used types
pub use dashboard::Dashboard;
pub use equipment::{Equipment, EquipmentDetails};
pub use location::{BuildingType, Location};
