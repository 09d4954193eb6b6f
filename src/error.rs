//! Error types for EquipMaster server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 2,
    NoSuchEquipment = 3,
    NoSuchUser = 4,
    NoSuchData = 5,
    BadValue = 6,
    Duplicate = 7,
    EquipmentDecommissioned = 8,
    EquipmentNotAvailable = 9,
    AlreadyAssigned = 10,
    AlreadyReturned = 11,
    MaintenanceDateInFuture = 12,
    UserBlocked = 13,
    UserHasAssignments = 14,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Equipment decommissioned: {0}")]
    Decommissioned(String),

    #[error("Equipment not available: {0}")]
    NotAvailable(String),

    #[error("Already assigned: {0}")]
    AlreadyAssigned(String),

    #[error("Already returned: {0}")]
    AlreadyReturned(String),

    #[error("Date in the future: {0}")]
    FutureDate(String),

    #[error("User blocked: {0}")]
    Blocked(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchData, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::Duplicate, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
            AppError::Decommissioned(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::EquipmentDecommissioned,
                msg.clone(),
            ),
            AppError::NotAvailable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::EquipmentNotAvailable,
                msg.clone(),
            ),
            AppError::AlreadyAssigned(msg) => {
                (StatusCode::CONFLICT, ErrorCode::AlreadyAssigned, msg.clone())
            }
            AppError::AlreadyReturned(msg) => {
                (StatusCode::CONFLICT, ErrorCode::AlreadyReturned, msg.clone())
            }
            AppError::FutureDate(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::MaintenanceDateInFuture,
                msg.clone(),
            ),
            AppError::Blocked(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::UserBlocked, msg.clone())
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
