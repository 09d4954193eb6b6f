//! Equipment types API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment_type::{CreateEquipmentType, EquipmentType, UpdateEquipmentType},
};

use super::ActingUser;

/// List all equipment types
#[utoipa::path(
    get,
    path = "/equipment-types",
    tag = "equipment-types",
    responses(
        (status = 200, description = "Equipment types", body = Vec<EquipmentType>)
    )
)]
pub async fn list_equipment_types(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipmentType>>> {
    let types = state.services.equipment_types.list().await?;
    Ok(Json(types))
}

/// Get equipment type by ID
#[utoipa::path(
    get,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    params(("id" = i32, Path, description = "Equipment type ID")),
    responses(
        (status = 200, description = "Equipment type", body = EquipmentType),
        (status = 404, description = "Equipment type not found")
    )
)]
pub async fn get_equipment_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<EquipmentType>> {
    let equipment_type = state.services.equipment_types.get(id).await?;
    Ok(Json(equipment_type))
}

/// Create equipment type
#[utoipa::path(
    post,
    path = "/equipment-types",
    tag = "equipment-types",
    request_body = CreateEquipmentType,
    responses(
        (status = 201, description = "Equipment type created", body = EquipmentType),
        (status = 409, description = "Name already exists")
    )
)]
pub async fn create_equipment_type(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Json(data): Json<CreateEquipmentType>,
) -> AppResult<(StatusCode, Json<EquipmentType>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let equipment_type = state
        .services
        .equipment_types
        .create(&data, &username)
        .await?;
    Ok((StatusCode::CREATED, Json(equipment_type)))
}

/// Update equipment type
#[utoipa::path(
    put,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    params(("id" = i32, Path, description = "Equipment type ID")),
    request_body = UpdateEquipmentType,
    responses(
        (status = 200, description = "Equipment type updated", body = EquipmentType),
        (status = 404, description = "Equipment type not found")
    )
)]
pub async fn update_equipment_type(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateEquipmentType>,
) -> AppResult<Json<EquipmentType>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let equipment_type = state
        .services
        .equipment_types
        .update(id, &data, &username)
        .await?;
    Ok(Json(equipment_type))
}

/// Delete equipment type
#[utoipa::path(
    delete,
    path = "/equipment-types/{id}",
    tag = "equipment-types",
    params(("id" = i32, Path, description = "Equipment type ID")),
    responses(
        (status = 204, description = "Equipment type deleted"),
        (status = 404, description = "Equipment type not found"),
        (status = 409, description = "Equipment type still in use")
    )
)]
pub async fn delete_equipment_type(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.equipment_types.delete(id, &username).await?;
    Ok(StatusCode::NO_CONTENT)
}
