//! Business logic services

pub mod assignments;
pub mod audit_log;
pub mod equipment;
pub mod equipment_types;
pub mod maintenance;
pub mod stats;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub equipment_types: equipment_types::EquipmentTypesService,
    pub users: users::UsersService,
    pub assignments: assignments::AssignmentsService,
    pub maintenance: maintenance::MaintenanceService,
    pub audit_log: audit_log::AuditLogService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(repository.clone()),
            equipment_types: equipment_types::EquipmentTypesService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            assignments: assignments::AssignmentsService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone()),
            audit_log: audit_log::AuditLogService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
