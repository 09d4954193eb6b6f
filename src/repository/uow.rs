//! Unit of work
//!
//! A scoped database transaction within which entity mutations are staged
//! and tracked. Commit appends the audit log entries synthesized from the
//! tracked changes and finalizes everything in one atomic transaction, so a
//! batch either persists with its complete audit trail or not at all.

use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};

use crate::{
    audit::{self, EntityChange},
    error::{AppError, AppResult},
    models::{
        assignment::{Assignment, NewAssignment},
        equipment::{Equipment, NewEquipment},
        equipment_type::{CreateEquipmentType, EquipmentType},
        maintenance::{MaintenanceLog, NewMaintenanceLog},
        user::{CreateUser, User},
    },
};

pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
    changes: Vec<EntityChange>,
    username: String,
}

impl UnitOfWork {
    pub(crate) async fn begin(pool: &PgPool, username: String) -> AppResult<Self> {
        let tx = pool.begin().await?;
        Ok(Self {
            tx,
            changes: Vec::new(),
            username,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    // -- reads (row-locked where a check-then-act follows) ------------------

    pub async fn equipment_for_update(&mut self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    pub async fn equipment_type(&mut self, id: i32) -> AppResult<EquipmentType> {
        sqlx::query_as::<_, EquipmentType>("SELECT * FROM equipment_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment type {} not found", id)))
    }

    pub async fn equipment_type_for_update(&mut self, id: i32) -> AppResult<EquipmentType> {
        sqlx::query_as::<_, EquipmentType>("SELECT * FROM equipment_types WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment type {} not found", id)))
    }

    pub async fn user_for_update(&mut self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn assignment_for_update(&mut self, id: i32) -> AppResult<Assignment> {
        sqlx::query_as::<_, Assignment>("SELECT * FROM assignments WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assignment {} not found", id)))
    }

    pub async fn maintenance_log_for_update(&mut self, id: i32) -> AppResult<MaintenanceLog> {
        sqlx::query_as::<_, MaintenanceLog>(
            "SELECT * FROM maintenance_logs WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance log {} not found", id)))
    }

    /// Whether the equipment has an outstanding assignment
    pub async fn has_active_assignment(&mut self, equipment_id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM assignments WHERE equipment_id = $1 AND returned_at IS NULL)",
        )
        .bind(equipment_id)
        .fetch_one(&mut *self.tx)
        .await?;
        Ok(exists)
    }

    pub async fn assignments_for_equipment(&mut self, equipment_id: i32) -> AppResult<Vec<Assignment>> {
        let rows = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE equipment_id = $1 ORDER BY id FOR UPDATE",
        )
        .bind(equipment_id)
        .fetch_all(&mut *self.tx)
        .await?;
        Ok(rows)
    }

    pub async fn serial_number_exists(
        &mut self,
        serial_number: &str,
        exclude_id: Option<i32>,
    ) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM equipment WHERE serial_number = $1 AND id != $2)",
            )
            .bind(serial_number)
            .bind(id)
            .fetch_one(&mut *self.tx)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment WHERE serial_number = $1)")
                .bind(serial_number)
                .fetch_one(&mut *self.tx)
                .await?
        };
        Ok(exists)
    }

    pub async fn type_name_exists(
        &mut self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> AppResult<bool> {
        let exists: bool = if let Some(id) = exclude_id {
            sqlx::query_scalar(
                "SELECT EXISTS(SELECT 1 FROM equipment_types WHERE name = $1 AND id != $2)",
            )
            .bind(name)
            .bind(id)
            .fetch_one(&mut *self.tx)
            .await?
        } else {
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment_types WHERE name = $1)")
                .bind(name)
                .fetch_one(&mut *self.tx)
                .await?
        };
        Ok(exists)
    }

    pub async fn user_has_assignments(&mut self, user_id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM assignments WHERE user_id = $1)")
                .bind(user_id)
                .fetch_one(&mut *self.tx)
                .await?;
        Ok(exists)
    }

    pub async fn equipment_type_in_use(&mut self, type_id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment WHERE equipment_type_id = $1)")
                .bind(type_id)
                .fetch_one(&mut *self.tx)
                .await?;
        Ok(exists)
    }

    // -- equipment ----------------------------------------------------------

    pub async fn insert_equipment(&mut self, new: &NewEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment
                (serial_number, model, equipment_type_id, purchase_date, status, next_maintenance_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&new.serial_number)
        .bind(&new.model)
        .bind(new.equipment_type_id)
        .bind(new.purchase_date)
        .bind(new.status)
        .bind(new.next_maintenance_date)
        .fetch_one(&mut *self.tx)
        .await?;

        self.changes.push(EntityChange::created(&row));
        Ok(row)
    }

    pub async fn update_equipment(&mut self, before: &Equipment, after: &Equipment) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE equipment SET
                serial_number = $1, model = $2, equipment_type_id = $3, purchase_date = $4,
                status = $5, last_maintenance_date = $6, next_maintenance_date = $7,
                decommission_date = $8
            WHERE id = $9
            "#,
        )
        .bind(&after.serial_number)
        .bind(&after.model)
        .bind(after.equipment_type_id)
        .bind(after.purchase_date)
        .bind(after.status)
        .bind(after.last_maintenance_date)
        .bind(after.next_maintenance_date)
        .bind(after.decommission_date)
        .bind(after.id)
        .execute(&mut *self.tx)
        .await?;

        self.changes.push(EntityChange::modified(before, after));
        Ok(())
    }

    pub async fn delete_equipment(&mut self, equipment: &Equipment) -> AppResult<()> {
        sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(equipment.id)
            .execute(&mut *self.tx)
            .await?;

        self.changes.push(EntityChange::deleted(equipment));
        Ok(())
    }

    // -- equipment types ----------------------------------------------------

    pub async fn insert_equipment_type(
        &mut self,
        data: &CreateEquipmentType,
    ) -> AppResult<EquipmentType> {
        let row = sqlx::query_as::<_, EquipmentType>(
            r#"
            INSERT INTO equipment_types (name, description, maintenance_interval_days)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.maintenance_interval_days)
        .fetch_one(&mut *self.tx)
        .await?;

        self.changes.push(EntityChange::created(&row));
        Ok(row)
    }

    pub async fn update_equipment_type(
        &mut self,
        before: &EquipmentType,
        after: &EquipmentType,
    ) -> AppResult<()> {
        sqlx::query(
            "UPDATE equipment_types SET name = $1, description = $2, maintenance_interval_days = $3 WHERE id = $4",
        )
        .bind(&after.name)
        .bind(&after.description)
        .bind(after.maintenance_interval_days)
        .bind(after.id)
        .execute(&mut *self.tx)
        .await?;

        self.changes.push(EntityChange::modified(before, after));
        Ok(())
    }

    pub async fn delete_equipment_type(&mut self, equipment_type: &EquipmentType) -> AppResult<()> {
        sqlx::query("DELETE FROM equipment_types WHERE id = $1")
            .bind(equipment_type.id)
            .execute(&mut *self.tx)
            .await?;

        self.changes.push(EntityChange::deleted(equipment_type));
        Ok(())
    }

    // -- users ---------------------------------------------------------------

    pub async fn insert_user(&mut self, data: &CreateUser) -> AppResult<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (full_name, department, personnel_number)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(&data.department)
        .bind(&data.personnel_number)
        .fetch_one(&mut *self.tx)
        .await?;

        self.changes.push(EntityChange::created(&row));
        Ok(row)
    }

    pub async fn update_user(&mut self, before: &User, after: &User) -> AppResult<()> {
        sqlx::query(
            "UPDATE users SET full_name = $1, department = $2, personnel_number = $3, is_blocked = $4 WHERE id = $5",
        )
        .bind(&after.full_name)
        .bind(&after.department)
        .bind(&after.personnel_number)
        .bind(after.is_blocked)
        .bind(after.id)
        .execute(&mut *self.tx)
        .await?;

        self.changes.push(EntityChange::modified(before, after));
        Ok(())
    }

    pub async fn delete_user(&mut self, user: &User) -> AppResult<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user.id)
            .execute(&mut *self.tx)
            .await?;

        self.changes.push(EntityChange::deleted(user));
        Ok(())
    }

    // -- assignments ---------------------------------------------------------

    pub async fn insert_assignment(&mut self, new: &NewAssignment) -> AppResult<Assignment> {
        let row = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (equipment_id, user_id, assigned_at, assignment_notes)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new.equipment_id)
        .bind(new.user_id)
        .bind(new.assigned_at)
        .bind(&new.assignment_notes)
        .fetch_one(&mut *self.tx)
        .await?;

        self.changes.push(EntityChange::created(&row));
        Ok(row)
    }

    pub async fn update_assignment(&mut self, before: &Assignment, after: &Assignment) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE assignments SET
                equipment_id = $1, user_id = $2, assigned_at = $3, returned_at = $4,
                assignment_notes = $5, return_notes = $6
            WHERE id = $7
            "#,
        )
        .bind(after.equipment_id)
        .bind(after.user_id)
        .bind(after.assigned_at)
        .bind(after.returned_at)
        .bind(&after.assignment_notes)
        .bind(&after.return_notes)
        .bind(after.id)
        .execute(&mut *self.tx)
        .await?;

        self.changes.push(EntityChange::modified(before, after));
        Ok(())
    }

    pub async fn delete_assignment(&mut self, assignment: &Assignment) -> AppResult<()> {
        sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(assignment.id)
            .execute(&mut *self.tx)
            .await?;

        self.changes.push(EntityChange::deleted(assignment));
        Ok(())
    }

    // -- maintenance logs ----------------------------------------------------

    pub async fn insert_maintenance_log(
        &mut self,
        new: &NewMaintenanceLog,
    ) -> AppResult<MaintenanceLog> {
        let row = sqlx::query_as::<_, MaintenanceLog>(
            r#"
            INSERT INTO maintenance_logs
                (equipment_id, performed_by, date, maintenance_type, description, cost,
                 next_maintenance_date, result)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(new.equipment_id)
        .bind(&new.performed_by)
        .bind(new.date)
        .bind(new.maintenance_type)
        .bind(&new.description)
        .bind(new.cost)
        .bind(new.next_maintenance_date)
        .bind(new.result)
        .fetch_one(&mut *self.tx)
        .await?;

        self.changes.push(EntityChange::created(&row));
        Ok(row)
    }

    pub async fn update_maintenance_log(
        &mut self,
        before: &MaintenanceLog,
        after: &MaintenanceLog,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE maintenance_logs SET
                performed_by = $1, date = $2, maintenance_type = $3, description = $4,
                cost = $5, next_maintenance_date = $6, result = $7
            WHERE id = $8
            "#,
        )
        .bind(&after.performed_by)
        .bind(after.date)
        .bind(after.maintenance_type)
        .bind(&after.description)
        .bind(after.cost)
        .bind(after.next_maintenance_date)
        .bind(after.result)
        .bind(after.id)
        .execute(&mut *self.tx)
        .await?;

        self.changes.push(EntityChange::modified(before, after));
        Ok(())
    }

    // -- commit --------------------------------------------------------------

    /// Append the audit entries for all tracked changes and finalize the
    /// transaction. One timestamp per batch, entries in mutation order.
    pub async fn commit(mut self) -> AppResult<()> {
        let entries = audit::build_entries(&self.changes, &self.username, Utc::now());

        for entry in &entries {
            sqlx::query(
                r#"
                INSERT INTO log_entries (action, username, entity_name, details, timestamp)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(&entry.action)
            .bind(&entry.username)
            .bind(&entry.entity_name)
            .bind(&entry.details)
            .bind(entry.timestamp)
            .execute(&mut *self.tx)
            .await?;
        }

        self.tx.commit().await?;
        Ok(())
    }
}
