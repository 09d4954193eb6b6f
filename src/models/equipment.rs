//! Equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::audit::{opt, AuditEntity};
use crate::models::enums::EquipmentStatus;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    /// Unique serial number
    pub serial_number: String,
    pub model: Option<String>,
    pub equipment_type_id: i32,
    pub purchase_date: NaiveDate,
    /// Status (0=in use, 1=in reserve, 2=under maintenance, 3=decommissioned)
    pub status: i16,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub decommission_date: Option<DateTime<Utc>>,
}

impl Equipment {
    pub fn status_enum(&self) -> EquipmentStatus {
        EquipmentStatus::from(self.status)
    }
}

/// Equipment with its type, for list and detail views
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentDetails {
    pub id: i32,
    pub serial_number: String,
    pub model: Option<String>,
    pub equipment_type_id: i32,
    pub equipment_type_name: String,
    pub maintenance_interval_days: i32,
    pub purchase_date: NaiveDate,
    /// Status (0=in use, 1=in reserve, 2=under maintenance, 3=decommissioned)
    pub status: i16,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    pub decommission_date: Option<DateTime<Utc>>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 1, max = 100, message = "Serial number must be 1-100 characters"))]
    pub serial_number: String,
    #[validate(length(max = 150, message = "Model must be at most 150 characters"))]
    pub model: Option<String>,
    pub equipment_type_id: i32,
    /// Defaults to today
    pub purchase_date: Option<NaiveDate>,
    /// Status code; defaults to in reserve
    pub status: Option<i16>,
}

/// Update equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 1, max = 100, message = "Serial number must be 1-100 characters"))]
    pub serial_number: Option<String>,
    #[validate(length(max = 150, message = "Model must be at most 150 characters"))]
    pub model: Option<String>,
    pub equipment_type_id: Option<i32>,
    pub purchase_date: Option<NaiveDate>,
    pub status: Option<i16>,
    pub last_maintenance_date: Option<NaiveDate>,
    /// Overrides the derived value when supplied
    pub next_maintenance_date: Option<NaiveDate>,
    pub decommission_date: Option<DateTime<Utc>>,
}

/// New equipment row, with derived fields already applied
#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub serial_number: String,
    pub model: Option<String>,
    pub equipment_type_id: i32,
    pub purchase_date: NaiveDate,
    pub status: i16,
    pub next_maintenance_date: Option<NaiveDate>,
}

/// Equipment query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct EquipmentQuery {
    /// Status code filter
    pub status: Option<i16>,
    pub equipment_type_id: Option<i32>,
    /// Substring match on serial number or model
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Query parameters for the upcoming maintenance report
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct UpcomingMaintenanceQuery {
    /// Window in days, default 7
    pub days: Option<i64>,
}

impl AuditEntity for Equipment {
    const ENTITY: &'static str = "Equipment";

    fn entity_id(&self) -> i32 {
        self.id
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("serial_number", self.serial_number.clone()),
            ("model", opt(&self.model)),
            ("equipment_type_id", self.equipment_type_id.to_string()),
            ("purchase_date", self.purchase_date.to_string()),
            ("status", self.status_enum().to_string()),
            ("last_maintenance_date", opt(&self.last_maintenance_date)),
            ("next_maintenance_date", opt(&self.next_maintenance_date)),
            ("decommission_date", opt(&self.decommission_date)),
        ]
    }
}
