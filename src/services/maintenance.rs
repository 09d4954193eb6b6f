//! Maintenance service

use chrono::Utc;

use crate::{
    error::AppResult,
    lifecycle,
    models::{
        enums::{MaintenanceResult, MaintenanceType},
        maintenance::{
            CreateMaintenanceLog, MaintenanceLog, MaintenanceLogDetails, MaintenanceQuery,
            NewMaintenanceLog, UpdateMaintenanceLog,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &MaintenanceQuery) -> AppResult<(Vec<MaintenanceLogDetails>, i64)> {
        self.repository.maintenance.list(query).await
    }

    pub async fn get(&self, id: i32) -> AppResult<MaintenanceLog> {
        self.repository.maintenance.get_by_id(id).await
    }

    /// Record a maintenance event. Validates the date and equipment status,
    /// then applies the lifecycle rules to the equipment in the same unit of
    /// work as the log insert.
    pub async fn record(&self, data: &CreateMaintenanceLog, username: &str) -> AppResult<MaintenanceLog> {
        let mut uow = self.repository.unit_of_work(username).await?;

        let equipment_before = uow.equipment_for_update(data.equipment_id).await?;
        let equipment_type = uow.equipment_type(equipment_before.equipment_type_id).await?;

        let now = Utc::now();
        let today = now.date_naive();
        let date = data.date.unwrap_or(today);
        lifecycle::check_maintenance_allowed(equipment_before.status_enum(), date, today)?;

        let result = MaintenanceResult::from(
            data.result.unwrap_or(MaintenanceResult::InProgress.into()),
        );

        let mut equipment_after = equipment_before.clone();
        let next_maintenance_date = lifecycle::apply_maintenance(
            &mut equipment_after,
            date,
            result,
            equipment_type.maintenance_interval_days,
            now,
        );

        let log = uow
            .insert_maintenance_log(&NewMaintenanceLog {
                equipment_id: data.equipment_id,
                performed_by: data.performed_by.clone(),
                date,
                maintenance_type: data
                    .maintenance_type
                    .unwrap_or(MaintenanceType::Planned.into()),
                description: data.description.clone(),
                cost: data.cost,
                next_maintenance_date,
                result: result.into(),
            })
            .await?;

        uow.update_equipment(&equipment_before, &equipment_after).await?;
        uow.commit().await?;
        Ok(log)
    }

    /// Corrective edit of an existing log. Re-runs the lifecycle rules with
    /// the edited values against the same equipment.
    pub async fn correct(
        &self,
        id: i32,
        data: &UpdateMaintenanceLog,
        username: &str,
    ) -> AppResult<MaintenanceLog> {
        let mut uow = self.repository.unit_of_work(username).await?;

        let log_before = uow.maintenance_log_for_update(id).await?;
        let equipment_before = uow.equipment_for_update(log_before.equipment_id).await?;
        let equipment_type = uow.equipment_type(equipment_before.equipment_type_id).await?;

        let mut log_after = log_before.clone();
        if let Some(ref performed_by) = data.performed_by {
            log_after.performed_by = performed_by.clone();
        }
        if let Some(date) = data.date {
            log_after.date = date;
        }
        if let Some(maintenance_type) = data.maintenance_type {
            log_after.maintenance_type = maintenance_type;
        }
        if data.description.is_some() {
            log_after.description = data.description.clone();
        }
        if data.cost.is_some() {
            log_after.cost = data.cost;
        }
        if let Some(result) = data.result {
            log_after.result = result;
        }

        let now = Utc::now();
        let today = now.date_naive();
        lifecycle::check_maintenance_allowed(
            equipment_before.status_enum(),
            log_after.date,
            today,
        )?;

        let mut equipment_after = equipment_before.clone();
        let next_maintenance_date = lifecycle::apply_maintenance(
            &mut equipment_after,
            log_after.date,
            log_after.result_enum(),
            equipment_type.maintenance_interval_days,
            now,
        );
        if next_maintenance_date.is_some() {
            log_after.next_maintenance_date = next_maintenance_date;
        }

        uow.update_maintenance_log(&log_before, &log_after).await?;
        uow.update_equipment(&equipment_before, &equipment_after).await?;
        uow.commit().await?;
        Ok(log_after)
    }
}
