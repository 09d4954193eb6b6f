//! User (personnel) model
//!
//! A user here is a person equipment can be issued to, not a login account.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::audit::{opt, AuditEntity};

/// Personnel record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub department: String,
    pub personnel_number: Option<String>,
    /// Blocked users cannot be issued equipment
    pub is_blocked: bool,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,
    #[validate(length(min = 1, max = 50, message = "Department must be 1-50 characters"))]
    pub department: String,
    #[validate(length(max = 20, message = "Personnel number must be at most 20 characters"))]
    pub personnel_number: Option<String>,
}

/// Update user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Department must be 1-50 characters"))]
    pub department: Option<String>,
    #[validate(length(max = 20, message = "Personnel number must be at most 20 characters"))]
    pub personnel_number: Option<String>,
    pub is_blocked: Option<bool>,
}

/// User query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct UserQuery {
    /// Substring match on full name or department
    pub search: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl AuditEntity for User {
    const ENTITY: &'static str = "User";

    fn entity_id(&self) -> i32 {
        self.id
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("full_name", self.full_name.clone()),
            ("department", self.department.clone()),
            ("personnel_number", opt(&self.personnel_number)),
            ("is_blocked", self.is_blocked.to_string()),
        ]
    }
}
