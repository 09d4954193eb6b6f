//! Equipment types service

use crate::{
    error::{AppError, AppResult},
    models::equipment_type::{CreateEquipmentType, EquipmentType, UpdateEquipmentType},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentTypesService {
    repository: Repository,
}

impl EquipmentTypesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<EquipmentType>> {
        self.repository.equipment_types.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<EquipmentType> {
        self.repository.equipment_types.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateEquipmentType, username: &str) -> AppResult<EquipmentType> {
        let mut uow = self.repository.unit_of_work(username).await?;

        if uow.type_name_exists(&data.name, None).await? {
            return Err(AppError::Conflict(format!(
                "Equipment type {} already exists",
                data.name
            )));
        }

        let equipment_type = uow.insert_equipment_type(data).await?;
        uow.commit().await?;
        Ok(equipment_type)
    }

    pub async fn update(
        &self,
        id: i32,
        data: &UpdateEquipmentType,
        username: &str,
    ) -> AppResult<EquipmentType> {
        let mut uow = self.repository.unit_of_work(username).await?;
        let before = uow.equipment_type_for_update(id).await?;

        if let Some(ref name) = data.name {
            if *name != before.name && uow.type_name_exists(name, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Equipment type {} already exists",
                    name
                )));
            }
        }

        let mut after = before.clone();
        if let Some(ref name) = data.name {
            after.name = name.clone();
        }
        if data.description.is_some() {
            after.description = data.description.clone();
        }
        if let Some(interval) = data.maintenance_interval_days {
            after.maintenance_interval_days = interval;
        }

        uow.update_equipment_type(&before, &after).await?;
        uow.commit().await?;
        Ok(after)
    }

    /// Types still referenced by equipment cannot be deleted
    pub async fn delete(&self, id: i32, username: &str) -> AppResult<()> {
        let mut uow = self.repository.unit_of_work(username).await?;
        let equipment_type = uow.equipment_type_for_update(id).await?;

        if uow.equipment_type_in_use(id).await? {
            return Err(AppError::Conflict(format!(
                "Equipment type {} is still in use",
                equipment_type.name
            )));
        }

        uow.delete_equipment_type(&equipment_type).await?;
        uow.commit().await?;
        Ok(())
    }
}
