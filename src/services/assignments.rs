//! Assignment service: issuing and returning equipment

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    lifecycle,
    models::{
        assignment::{
            AssignmentDetails, AssignmentQuery, IssueEquipment, NewAssignment, ReturnEquipment,
        },
        enums::EquipmentStatus,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AssignmentsService {
    repository: Repository,
}

impl AssignmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &AssignmentQuery) -> AppResult<(Vec<AssignmentDetails>, i64)> {
        self.repository.assignments.list(query).await
    }

    pub async fn get(&self, id: i32) -> AppResult<AssignmentDetails> {
        self.repository.assignments.get_details(id).await
    }

    /// Issue equipment to a user. The active-assignment check and the
    /// assignment insert run in the same unit of work, so the "at most one
    /// active assignment per equipment" invariant holds under interleaving.
    pub async fn issue(&self, data: &IssueEquipment, username: &str) -> AppResult<AssignmentDetails> {
        let mut uow = self.repository.unit_of_work(username).await?;

        let equipment_before = uow.equipment_for_update(data.equipment_id).await?;
        lifecycle::check_issue_allowed(equipment_before.status_enum())?;

        if uow.has_active_assignment(data.equipment_id).await? {
            return Err(AppError::AlreadyAssigned(format!(
                "Equipment {} already has an active assignment",
                equipment_before.serial_number
            )));
        }

        let user = uow.user_for_update(data.user_id).await?;
        if user.is_blocked {
            return Err(AppError::Blocked(format!(
                "User {} is blocked and cannot be issued equipment",
                user.full_name
            )));
        }

        let assignment = uow
            .insert_assignment(&NewAssignment {
                equipment_id: data.equipment_id,
                user_id: data.user_id,
                assigned_at: data.assigned_at.unwrap_or_else(Utc::now),
                assignment_notes: data.assignment_notes.clone(),
            })
            .await?;

        let mut equipment_after = equipment_before.clone();
        equipment_after.status = EquipmentStatus::InUse.into();
        uow.update_equipment(&equipment_before, &equipment_after).await?;

        uow.commit().await?;
        self.repository.assignments.get_details(assignment.id).await
    }

    /// Return issued equipment: stamps `returned_at` on the assignment and
    /// puts the equipment back in reserve
    pub async fn return_equipment(
        &self,
        id: i32,
        data: &ReturnEquipment,
        username: &str,
    ) -> AppResult<AssignmentDetails> {
        let mut uow = self.repository.unit_of_work(username).await?;

        let before = uow.assignment_for_update(id).await?;
        if before.returned_at.is_some() {
            return Err(AppError::AlreadyReturned(format!(
                "Assignment {} was already returned",
                id
            )));
        }

        let mut after = before.clone();
        after.returned_at = Some(Utc::now());
        after.return_notes = data.return_notes.clone();
        uow.update_assignment(&before, &after).await?;

        let equipment_before = uow.equipment_for_update(before.equipment_id).await?;
        let mut equipment_after = equipment_before.clone();
        equipment_after.status = EquipmentStatus::InReserve.into();
        uow.update_equipment(&equipment_before, &equipment_after).await?;

        uow.commit().await?;
        self.repository.assignments.get_details(id).await
    }
}
