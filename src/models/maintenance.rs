//! Maintenance log model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::audit::{opt, AuditEntity};
use crate::models::enums::{MaintenanceResult, MaintenanceType};

/// Maintenance log record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceLog {
    pub id: i32,
    pub equipment_id: i32,
    /// Name of the person or service that performed the maintenance
    pub performed_by: String,
    pub date: NaiveDate,
    /// Type (0=planned, 1=unplanned, 2=repair)
    pub maintenance_type: i16,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub cost: Option<Decimal>,
    /// Computed from the equipment type's maintenance interval
    pub next_maintenance_date: Option<NaiveDate>,
    /// Result (0=in progress, 1=success, 2=needs replacement, 3=failed)
    pub result: i16,
}

impl MaintenanceLog {
    pub fn result_enum(&self) -> MaintenanceResult {
        MaintenanceResult::from(self.result)
    }
}

/// Maintenance log with the equipment serial number, for list views
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceLogDetails {
    pub id: i32,
    pub equipment_id: i32,
    pub serial_number: String,
    pub performed_by: String,
    pub date: NaiveDate,
    /// Type (0=planned, 1=unplanned, 2=repair)
    pub maintenance_type: i16,
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub cost: Option<Decimal>,
    pub next_maintenance_date: Option<NaiveDate>,
    /// Result (0=in progress, 1=success, 2=needs replacement, 3=failed)
    pub result: i16,
}

/// Record maintenance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMaintenanceLog {
    pub equipment_id: i32,
    #[validate(length(min = 1, max = 100, message = "Performer must be 1-100 characters"))]
    pub performed_by: String,
    /// Defaults to today; must not be in the future
    pub date: Option<NaiveDate>,
    /// Type code; defaults to planned
    pub maintenance_type: Option<i16>,
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub cost: Option<Decimal>,
    /// Result code; defaults to in progress
    pub result: Option<i16>,
}

/// Corrective edit of an existing maintenance log. The target equipment
/// cannot be changed; lifecycle rules are re-run with the edited values.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMaintenanceLog {
    #[validate(length(min = 1, max = 100, message = "Performer must be 1-100 characters"))]
    pub performed_by: Option<String>,
    pub date: Option<NaiveDate>,
    pub maintenance_type: Option<i16>,
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub cost: Option<Decimal>,
    pub result: Option<i16>,
}

/// New maintenance log row, with the derived next date already applied
#[derive(Debug, Clone)]
pub struct NewMaintenanceLog {
    pub equipment_id: i32,
    pub performed_by: String,
    pub date: NaiveDate,
    pub maintenance_type: i16,
    pub description: Option<String>,
    pub cost: Option<Decimal>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub result: i16,
}

/// Maintenance log query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct MaintenanceQuery {
    pub equipment_id: Option<i32>,
    /// Result code filter
    pub result: Option<i16>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl AuditEntity for MaintenanceLog {
    const ENTITY: &'static str = "MaintenanceLog";

    fn entity_id(&self) -> i32 {
        self.id
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("equipment_id", self.equipment_id.to_string()),
            ("performed_by", self.performed_by.clone()),
            ("date", self.date.to_string()),
            (
                "maintenance_type",
                MaintenanceType::from(self.maintenance_type).to_string(),
            ),
            ("description", opt(&self.description)),
            ("cost", opt(&self.cost)),
            ("next_maintenance_date", opt(&self.next_maintenance_date)),
            ("result", self.result_enum().to_string()),
        ]
    }
}
