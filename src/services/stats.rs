//! Statistics service
//!
//! All equipment counts come from the status column, which the lifecycle
//! operations keep authoritative.

use chrono::{Duration, Utc};
use sqlx::Row;

use crate::{
    api::stats::{EquipmentStats, StatsResponse},
    error::AppResult,
    models::enums::EquipmentStatus,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Summary statistics for the dashboard
    pub async fn summary(&self) -> AppResult<StatsResponse> {
        let pool = &self.repository.pool;

        let mut equipment = EquipmentStats {
            total: 0,
            in_use: 0,
            in_reserve: 0,
            under_maintenance: 0,
            decommissioned: 0,
        };

        let rows = sqlx::query("SELECT status, COUNT(*) as count FROM equipment GROUP BY status")
            .fetch_all(pool)
            .await?;
        for row in rows {
            let status: i16 = row.get("status");
            let count: i64 = row.get("count");
            equipment.total += count;
            match EquipmentStatus::from(status) {
                EquipmentStatus::InUse => equipment.in_use += count,
                EquipmentStatus::InReserve => equipment.in_reserve += count,
                EquipmentStatus::UnderMaintenance => equipment.under_maintenance += count,
                EquipmentStatus::Decommissioned => equipment.decommissioned += count,
            }
        }

        let active_assignments = self.repository.assignments.count_active().await?;

        let today = Utc::now().date_naive();
        let overdue_maintenance: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM equipment WHERE next_maintenance_date < $1 AND status != $2",
        )
        .bind(today)
        .bind(i16::from(EquipmentStatus::Decommissioned))
        .fetch_one(pool)
        .await?;

        let upcoming_maintenance: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM equipment
            WHERE next_maintenance_date >= $1 AND next_maintenance_date <= $2 AND status != $3
            "#,
        )
        .bind(today)
        .bind(today + Duration::days(7))
        .bind(i16::from(EquipmentStatus::Decommissioned))
        .fetch_one(pool)
        .await?;

        Ok(StatsResponse {
            equipment,
            active_assignments,
            overdue_maintenance,
            upcoming_maintenance,
        })
    }
}
