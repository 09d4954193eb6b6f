//! Assignment model (equipment issued to a person)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::audit::{opt, AuditEntity};

/// Assignment record; `returned_at` unset means the equipment is currently
/// checked out
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Assignment {
    pub id: i32,
    pub equipment_id: i32,
    pub user_id: i32,
    pub assigned_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub assignment_notes: Option<String>,
    pub return_notes: Option<String>,
}

impl Assignment {
    pub fn is_active(&self) -> bool {
        self.returned_at.is_none()
    }
}

/// Assignment with equipment and user details, for list views
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AssignmentDetails {
    pub id: i32,
    pub equipment_id: i32,
    pub serial_number: String,
    pub model: Option<String>,
    pub user_id: i32,
    pub user_full_name: String,
    pub department: String,
    pub assigned_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub assignment_notes: Option<String>,
    pub return_notes: Option<String>,
}

/// Issue equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct IssueEquipment {
    pub equipment_id: i32,
    pub user_id: i32,
    /// Defaults to now
    pub assigned_at: Option<DateTime<Utc>>,
    #[validate(length(max = 500, message = "Assignment notes must be at most 500 characters"))]
    pub assignment_notes: Option<String>,
}

/// Return equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReturnEquipment {
    #[validate(length(max = 500, message = "Return notes must be at most 500 characters"))]
    pub return_notes: Option<String>,
}

/// New assignment row
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub equipment_id: i32,
    pub user_id: i32,
    pub assigned_at: DateTime<Utc>,
    pub assignment_notes: Option<String>,
}

/// Assignment query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AssignmentQuery {
    /// true = outstanding only, false = returned only
    pub active: Option<bool>,
    pub equipment_id: Option<i32>,
    pub user_id: Option<i32>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl AuditEntity for Assignment {
    const ENTITY: &'static str = "Assignment";

    fn entity_id(&self) -> i32 {
        self.id
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("equipment_id", self.equipment_id.to_string()),
            ("user_id", self.user_id.to_string()),
            ("assigned_at", self.assigned_at.to_string()),
            ("returned_at", opt(&self.returned_at)),
            ("assignment_notes", opt(&self.assignment_notes)),
            ("return_notes", opt(&self.return_notes)),
        ]
    }
}
