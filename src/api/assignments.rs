//! Assignment API endpoints (issue and return equipment)

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
    models::assignment::{AssignmentDetails, AssignmentQuery, IssueEquipment, ReturnEquipment},
};

use super::ActingUser;

/// Paginated assignments response
#[derive(Serialize, ToSchema)]
pub struct AssignmentsListResponse {
    pub assignments: Vec<AssignmentDetails>,
    pub total: i64,
}

/// Return response with assignment details
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    /// Return status
    pub status: String,
    /// Assignment details
    pub assignment: AssignmentDetails,
}

/// List assignments with filters and pagination
#[utoipa::path(
    get,
    path = "/assignments",
    tag = "assignments",
    params(AssignmentQuery),
    responses(
        (status = 200, description = "Assignments list", body = AssignmentsListResponse)
    )
)]
pub async fn list_assignments(
    State(state): State<crate::AppState>,
    Query(query): Query<AssignmentQuery>,
) -> AppResult<Json<AssignmentsListResponse>> {
    let (assignments, total) = state.services.assignments.list(&query).await?;
    Ok(Json(AssignmentsListResponse { assignments, total }))
}

/// Get assignment by ID
#[utoipa::path(
    get,
    path = "/assignments/{id}",
    tag = "assignments",
    params(("id" = i32, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Assignment details", body = AssignmentDetails),
        (status = 404, description = "Assignment not found")
    )
)]
pub async fn get_assignment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AssignmentDetails>> {
    let assignment = state.services.assignments.get(id).await?;
    Ok(Json(assignment))
}

/// Issue equipment to a user
#[utoipa::path(
    post,
    path = "/assignments",
    tag = "assignments",
    request_body = IssueEquipment,
    responses(
        (status = 201, description = "Equipment issued", body = AssignmentDetails),
        (status = 404, description = "Equipment or user not found"),
        (status = 409, description = "Equipment already has an active assignment"),
        (status = 422, description = "Equipment not available or user blocked")
    )
)]
pub async fn issue_equipment(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Json(data): Json<IssueEquipment>,
) -> AppResult<(StatusCode, Json<AssignmentDetails>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let assignment = state.services.assignments.issue(&data, &username).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// Return issued equipment
#[utoipa::path(
    post,
    path = "/assignments/{id}/return",
    tag = "assignments",
    params(("id" = i32, Path, description = "Assignment ID")),
    request_body = ReturnEquipment,
    responses(
        (status = 200, description = "Equipment returned", body = ReturnResponse),
        (status = 404, description = "Assignment not found"),
        (status = 409, description = "Already returned")
    )
)]
pub async fn return_equipment(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Path(id): Path<i32>,
    Json(data): Json<ReturnEquipment>,
) -> AppResult<Json<ReturnResponse>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let assignment = state
        .services
        .assignments
        .return_equipment(id, &data, &username)
        .await?;

    Ok(Json(ReturnResponse {
        status: "returned".to_string(),
        assignment,
    }))
}
