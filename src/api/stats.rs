//! Statistics API endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Equipment counts by status
#[derive(Serialize, ToSchema)]
pub struct EquipmentStats {
    pub total: i64,
    pub in_use: i64,
    pub in_reserve: i64,
    pub under_maintenance: i64,
    pub decommissioned: i64,
}

/// Summary statistics response
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub equipment: EquipmentStats,
    /// Outstanding assignments
    pub active_assignments: i64,
    /// Equipment whose next maintenance date has passed
    pub overdue_maintenance: i64,
    /// Equipment due for maintenance within the coming week
    pub upcoming_maintenance: i64,
}

/// Summary statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Summary statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.summary().await?;
    Ok(Json(stats))
}
