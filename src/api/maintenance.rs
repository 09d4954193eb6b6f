//! Maintenance log API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{
        CreateMaintenanceLog, MaintenanceLog, MaintenanceLogDetails, MaintenanceQuery,
        UpdateMaintenanceLog,
    },
};

use super::ActingUser;

/// Paginated maintenance logs response
#[derive(Serialize, ToSchema)]
pub struct MaintenanceListResponse {
    pub logs: Vec<MaintenanceLogDetails>,
    pub total: i64,
}

/// List maintenance logs with filters and pagination
#[utoipa::path(
    get,
    path = "/maintenance-logs",
    tag = "maintenance",
    params(MaintenanceQuery),
    responses(
        (status = 200, description = "Maintenance logs", body = MaintenanceListResponse)
    )
)]
pub async fn list_maintenance_logs(
    State(state): State<crate::AppState>,
    Query(query): Query<MaintenanceQuery>,
) -> AppResult<Json<MaintenanceListResponse>> {
    let (logs, total) = state.services.maintenance.list(&query).await?;
    Ok(Json(MaintenanceListResponse { logs, total }))
}

/// Get maintenance log by ID
#[utoipa::path(
    get,
    path = "/maintenance-logs/{id}",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Maintenance log ID")),
    responses(
        (status = 200, description = "Maintenance log", body = MaintenanceLog),
        (status = 404, description = "Maintenance log not found")
    )
)]
pub async fn get_maintenance_log(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MaintenanceLog>> {
    let log = state.services.maintenance.get(id).await?;
    Ok(Json(log))
}

/// Record a maintenance event
#[utoipa::path(
    post,
    path = "/maintenance-logs",
    tag = "maintenance",
    request_body = CreateMaintenanceLog,
    responses(
        (status = 201, description = "Maintenance recorded", body = MaintenanceLog),
        (status = 400, description = "Maintenance date in the future"),
        (status = 404, description = "Equipment not found"),
        (status = 422, description = "Equipment decommissioned")
    )
)]
pub async fn record_maintenance(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Json(data): Json<CreateMaintenanceLog>,
) -> AppResult<(StatusCode, Json<MaintenanceLog>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let log = state.services.maintenance.record(&data, &username).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// Corrective edit of a maintenance log
#[utoipa::path(
    put,
    path = "/maintenance-logs/{id}",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Maintenance log ID")),
    request_body = UpdateMaintenanceLog,
    responses(
        (status = 200, description = "Maintenance log updated", body = MaintenanceLog),
        (status = 400, description = "Maintenance date in the future"),
        (status = 404, description = "Maintenance log not found"),
        (status = 422, description = "Equipment decommissioned")
    )
)]
pub async fn update_maintenance_log(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateMaintenanceLog>,
) -> AppResult<Json<MaintenanceLog>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let log = state
        .services
        .maintenance
        .correct(id, &data, &username)
        .await?;
    Ok(Json(log))
}
