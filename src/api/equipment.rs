//! Equipment API endpoints

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
    models::{
        equipment::{
            CreateEquipment, Equipment, EquipmentDetails, EquipmentQuery, UpdateEquipment,
            UpcomingMaintenanceQuery,
        },
        maintenance::{MaintenanceLogDetails, MaintenanceQuery},
        assignment::{AssignmentDetails, AssignmentQuery},
    },
};

use super::ActingUser;

/// Paginated equipment response
#[derive(Serialize, ToSchema)]
pub struct EquipmentListResponse {
    pub equipment: Vec<EquipmentDetails>,
    pub total: i64,
}

/// List equipment with filters and pagination
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(EquipmentQuery),
    responses(
        (status = 200, description = "Equipment list", body = EquipmentListResponse)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipmentQuery>,
) -> AppResult<Json<EquipmentListResponse>> {
    let (equipment, total) = state.services.equipment.list(&query).await?;
    Ok(Json(EquipmentListResponse { equipment, total }))
}

/// Equipment due for maintenance within the coming window
#[utoipa::path(
    get,
    path = "/equipment/upcoming-maintenance",
    tag = "equipment",
    params(UpcomingMaintenanceQuery),
    responses(
        (status = 200, description = "Equipment due for maintenance", body = Vec<EquipmentDetails>)
    )
)]
pub async fn upcoming_maintenance(
    State(state): State<crate::AppState>,
    Query(query): Query<UpcomingMaintenanceQuery>,
) -> AppResult<Json<Vec<EquipmentDetails>>> {
    let days = query.days.unwrap_or(7);
    if days < 0 {
        return Err(AppError::BadRequest("days must not be negative".to_string()));
    }
    let equipment = state.services.equipment.upcoming_maintenance(days).await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentDetails),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EquipmentDetails>> {
    let equipment = state.services.equipment.get(id).await?;
    Ok(Json(equipment))
}

/// Register new equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 409, description = "Serial number already exists")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let equipment = state.services.equipment.create(&data, &username).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 404, description = "Equipment not found"),
        (status = 409, description = "Serial number already exists")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let equipment = state.services.equipment.update(id, &data, &username).await?;
    Ok(Json(equipment))
}

/// Delete equipment and its assignment history (destructive admin action)
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(id, &username).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Maintenance history for one piece of equipment
#[utoipa::path(
    get,
    path = "/equipment/{id}/maintenance",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Maintenance history", body = Vec<MaintenanceLogDetails>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn equipment_maintenance_history(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<MaintenanceLogDetails>>> {
    state.services.equipment.get(id).await?;
    let query = MaintenanceQuery {
        equipment_id: Some(id),
        result: None,
        page: None,
        per_page: None,
    };
    let (logs, _total) = state.services.maintenance.list(&query).await?;
    Ok(Json(logs))
}

/// Assignment history for one piece of equipment
#[utoipa::path(
    get,
    path = "/equipment/{id}/assignments",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Assignment history", body = Vec<AssignmentDetails>),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn equipment_assignment_history(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<AssignmentDetails>>> {
    state.services.equipment.get(id).await?;
    let query = AssignmentQuery {
        active: None,
        equipment_id: Some(id),
        user_id: None,
        page: None,
        per_page: None,
    };
    let (assignments, _total) = state.services.assignments.list(&query).await?;
    Ok(Json(assignments))
}
