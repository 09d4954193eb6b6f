//! Repository layer for database operations

pub mod assignments;
pub mod audit;
pub mod equipment;
pub mod equipment_types;
pub mod maintenance;
pub mod uow;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;
pub use uow::UnitOfWork;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub equipment: equipment::EquipmentRepository,
    pub equipment_types: equipment_types::EquipmentTypesRepository,
    pub users: users::UsersRepository,
    pub assignments: assignments::AssignmentsRepository,
    pub maintenance: maintenance::MaintenanceRepository,
    pub audit: audit::AuditRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            equipment_types: equipment_types::EquipmentTypesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            assignments: assignments::AssignmentsRepository::new(pool.clone()),
            maintenance: maintenance::MaintenanceRepository::new(pool.clone()),
            audit: audit::AuditRepository::new(pool.clone()),
            pool,
        }
    }

    /// Open a unit of work for a batch of mutations performed by `username`
    pub async fn unit_of_work(&self, username: &str) -> AppResult<UnitOfWork> {
        UnitOfWork::begin(&self.pool, username.to_string()).await
    }
}
