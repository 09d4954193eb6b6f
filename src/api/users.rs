//! Users (personnel) API endpoints

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
    models::user::{CreateUser, UpdateUser, User, UserQuery},
};

use super::ActingUser;

/// Paginated users response
#[derive(Serialize, ToSchema)]
pub struct UsersListResponse {
    pub users: Vec<User>,
    pub total: i64,
}

/// List users with search and pagination
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(UserQuery),
    responses(
        (status = 200, description = "Users list", body = UsersListResponse)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<UsersListResponse>> {
    let (users, total) = state.services.users.list(&query).await?;
    Ok(Json(UsersListResponse { users, total }))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state.services.users.get(id).await?;
    Ok(Json(user))
}

/// Create user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Json(data): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let user = state.services.users.create(&data, &username).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Path(id): Path<i32>,
    Json(data): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let user = state.services.users.update(id, &data, &username).await?;
    Ok(Json(user))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User has assignment history")
    )
)]
pub async fn delete_user(
    State(state): State<crate::AppState>,
    ActingUser(username): ActingUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.users.delete(id, &username).await?;
    Ok(StatusCode::NO_CONTENT)
}
