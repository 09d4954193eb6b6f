//! Equipment type model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::audit::{opt, AuditEntity};

/// Equipment type record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentType {
    pub id: i32,
    /// Type name, e.g. "Laptop", "Printer", "Monitor"
    pub name: String,
    pub description: Option<String>,
    /// Maintenance interval in days (1-3650)
    pub maintenance_interval_days: i32,
}

/// Create equipment type request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipmentType {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 3650, message = "Maintenance interval must be between 1 and 3650 days"))]
    pub maintenance_interval_days: i32,
}

/// Update equipment type request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipmentType {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, max = 3650, message = "Maintenance interval must be between 1 and 3650 days"))]
    pub maintenance_interval_days: Option<i32>,
}

impl AuditEntity for EquipmentType {
    const ENTITY: &'static str = "EquipmentType";

    fn entity_id(&self) -> i32 {
        self.id
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("description", opt(&self.description)),
            (
                "maintenance_interval_days",
                self.maintenance_interval_days.to_string(),
            ),
        ]
    }
}
