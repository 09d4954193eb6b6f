//! Equipment service

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    lifecycle,
    models::{
        enums::EquipmentStatus,
        equipment::{
            CreateEquipment, Equipment, EquipmentDetails, EquipmentQuery, NewEquipment,
            UpdateEquipment,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &EquipmentQuery) -> AppResult<(Vec<EquipmentDetails>, i64)> {
        self.repository.equipment.list(query).await
    }

    pub async fn get(&self, id: i32) -> AppResult<EquipmentDetails> {
        self.repository.equipment.get_details(id).await
    }

    /// Register new equipment. The next maintenance date is derived from the
    /// purchase date and the type's interval.
    pub async fn create(&self, data: &CreateEquipment, username: &str) -> AppResult<Equipment> {
        let mut uow = self.repository.unit_of_work(username).await?;

        if uow.serial_number_exists(&data.serial_number, None).await? {
            return Err(AppError::Conflict(format!(
                "Serial number {} already exists",
                data.serial_number
            )));
        }

        let equipment_type = uow.equipment_type(data.equipment_type_id).await?;
        let purchase_date = data.purchase_date.unwrap_or_else(|| Utc::now().date_naive());

        let new = NewEquipment {
            serial_number: data.serial_number.clone(),
            model: data.model.clone(),
            equipment_type_id: equipment_type.id,
            purchase_date,
            status: data.status.unwrap_or(EquipmentStatus::InReserve.into()),
            next_maintenance_date: lifecycle::next_maintenance_date(
                purchase_date,
                equipment_type.maintenance_interval_days,
            ),
        };

        let equipment = uow.insert_equipment(&new).await?;
        uow.commit().await?;
        Ok(equipment)
    }

    /// Edit equipment. Changing the type or purchase date re-derives the
    /// next maintenance date unless an explicit value is supplied; setting
    /// the status to decommissioned stamps the decommission date.
    pub async fn update(
        &self,
        id: i32,
        data: &UpdateEquipment,
        username: &str,
    ) -> AppResult<Equipment> {
        let mut uow = self.repository.unit_of_work(username).await?;
        let before = uow.equipment_for_update(id).await?;

        if let Some(ref serial_number) = data.serial_number {
            if *serial_number != before.serial_number
                && uow.serial_number_exists(serial_number, Some(id)).await?
            {
                return Err(AppError::Conflict(format!(
                    "Serial number {} already exists",
                    serial_number
                )));
            }
        }

        let mut after = before.clone();
        if let Some(ref serial_number) = data.serial_number {
            after.serial_number = serial_number.clone();
        }
        if data.model.is_some() {
            after.model = data.model.clone();
        }
        if let Some(type_id) = data.equipment_type_id {
            after.equipment_type_id = type_id;
        }
        if let Some(purchase_date) = data.purchase_date {
            after.purchase_date = purchase_date;
        }
        if let Some(status) = data.status {
            after.status = status;
        }
        if data.last_maintenance_date.is_some() {
            after.last_maintenance_date = data.last_maintenance_date;
        }

        let schedule_changed = after.equipment_type_id != before.equipment_type_id
            || after.purchase_date != before.purchase_date;
        if let Some(next) = data.next_maintenance_date {
            after.next_maintenance_date = Some(next);
        } else if schedule_changed {
            let equipment_type = uow.equipment_type(after.equipment_type_id).await?;
            after.next_maintenance_date = lifecycle::next_maintenance_date(
                after.purchase_date,
                equipment_type.maintenance_interval_days,
            );
        }

        if data.decommission_date.is_some() {
            after.decommission_date = data.decommission_date;
        } else if after.status_enum() == EquipmentStatus::Decommissioned
            && before.status_enum() != EquipmentStatus::Decommissioned
        {
            after.decommission_date = Some(Utc::now());
        }

        uow.update_equipment(&before, &after).await?;
        uow.commit().await?;
        Ok(after)
    }

    /// Destructive admin delete: removes the equipment's assignments in the
    /// same unit of work, then the equipment itself. Maintenance logs go via
    /// the database cascade.
    pub async fn delete(&self, id: i32, username: &str) -> AppResult<()> {
        let mut uow = self.repository.unit_of_work(username).await?;
        let equipment = uow.equipment_for_update(id).await?;

        let assignments = uow.assignments_for_equipment(id).await?;
        for assignment in &assignments {
            uow.delete_assignment(assignment).await?;
        }

        uow.delete_equipment(&equipment).await?;
        uow.commit().await?;
        Ok(())
    }

    /// Equipment due for maintenance within the given window
    pub async fn upcoming_maintenance(&self, days: i64) -> AppResult<Vec<EquipmentDetails>> {
        self.repository.equipment.upcoming_maintenance(days).await
    }
}
