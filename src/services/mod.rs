//! Business logic services

pub mod dashboard;
pub mod equipment;
pub mod locations;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub locations: locations::LocationsService,
    pub equipment: equipment::EquipmentService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            locations: locations::LocationsService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository.clone()),
            repository,
        }
    }
}
