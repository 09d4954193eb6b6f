//! API handlers for EquipMaster REST endpoints

pub mod assignments;
pub mod equipment;
pub mod equipment_types;
pub mod health;
pub mod log_entries;
pub mod maintenance;
pub mod openapi;
pub mod stats;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::{audit, error::AppError, AppState};

/// Header carrying the caller-supplied identity for mutating requests
pub const ACTING_USER_HEADER: &str = "x-acting-user";

/// Extractor for the acting username. Falls back to the server process's
/// operating-system account name when the caller supplied none.
pub struct ActingUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for ActingUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        let supplied = parts
            .headers
            .get(ACTING_USER_HEADER)
            .map(|value| {
                value
                    .to_str()
                    .map_err(|_| AppError::BadRequest("Invalid x-acting-user header".to_string()))
            })
            .transpose()?
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(ActingUser(supplied.unwrap_or_else(audit::os_username)))
    }
}
