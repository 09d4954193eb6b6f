//! Audit log API endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::log_entry::{LogEntry, LogEntryQuery},
};

/// Paginated log entries response
#[derive(Serialize, ToSchema)]
pub struct LogEntriesResponse {
    pub entries: Vec<LogEntry>,
    pub total: i64,
}

/// Browse the audit log, newest first
#[utoipa::path(
    get,
    path = "/log-entries",
    tag = "audit",
    params(LogEntryQuery),
    responses(
        (status = 200, description = "Audit log entries", body = LogEntriesResponse)
    )
)]
pub async fn list_log_entries(
    State(state): State<crate::AppState>,
    Query(query): Query<LogEntryQuery>,
) -> AppResult<Json<LogEntriesResponse>> {
    let (entries, total) = state.services.audit_log.list(&query).await?;
    Ok(Json(LogEntriesResponse { entries, total }))
}

/// Entity names present in the audit log (for filter dropdowns)
#[utoipa::path(
    get,
    path = "/log-entries/entities",
    tag = "audit",
    responses(
        (status = 200, description = "Distinct entity names", body = Vec<String>)
    )
)]
pub async fn list_log_entities(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<String>>> {
    let names = state.services.audit_log.entity_names().await?;
    Ok(Json(names))
}
