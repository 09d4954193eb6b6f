//! Audit log entry model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Audit log record. Append-only; never updated or deleted by the
/// application.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LogEntry {
    pub id: i32,
    /// Action kind (Create, Update, Delete, Return)
    pub action: String,
    /// Acting username
    pub username: String,
    /// Name of the mutated entity type
    pub entity_name: String,
    /// Human-readable description of the change
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

/// Log entry to append; id is assigned by the database
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogEntry {
    pub action: String,
    pub username: String,
    pub entity_name: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

/// Audit log query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct LogEntryQuery {
    /// Exact action kind (Create, Update, Delete, Return)
    pub action: Option<String>,
    /// Exact entity type name
    pub entity: Option<String>,
    /// Exact acting username
    pub username: Option<String>,
    /// Substring match on details
    pub search: Option<String>,
    /// Inclusive start date (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// Inclusive end date (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
