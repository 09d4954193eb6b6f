//! Equipment repository for database operations

use chrono::{Duration, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::EquipmentStatus,
        equipment::{Equipment, EquipmentDetails, EquipmentQuery},
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT e.id, e.serial_number, e.model, e.equipment_type_id,
           t.name AS equipment_type_name, t.maintenance_interval_days,
           e.purchase_date, e.status, e.last_maintenance_date,
           e.next_maintenance_date, e.decommission_date
    FROM equipment e
    JOIN equipment_types t ON e.equipment_type_id = t.id
"#;

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Get equipment with its type by ID
    pub async fn get_details(&self, id: i32) -> AppResult<EquipmentDetails> {
        let query = format!("{} WHERE e.id = $1", DETAILS_SELECT);
        sqlx::query_as::<_, EquipmentDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// List equipment with optional filters and pagination
    pub async fn list(&self, query: &EquipmentQuery) -> AppResult<(Vec<EquipmentDetails>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(50).clamp(1, 200);
        let offset = (page - 1) * per_page;

        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.status.is_some() {
            conditions.push(format!("e.status = ${}", idx));
            idx += 1;
        }
        if query.equipment_type_id.is_some() {
            conditions.push(format!("e.equipment_type_id = ${}", idx));
            idx += 1;
        }
        if query.search.is_some() {
            conditions.push(format!(
                "(e.serial_number ILIKE ${} OR e.model ILIKE ${})",
                idx, idx
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let pattern = query.search.as_ref().map(|s| format!("%{}%", s));

        let count_q = format!("SELECT COUNT(*) FROM equipment e {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_q);
        if let Some(status) = query.status {
            count_builder = count_builder.bind(status);
        }
        if let Some(type_id) = query.equipment_type_id {
            count_builder = count_builder.bind(type_id);
        }
        if let Some(ref p) = pattern {
            count_builder = count_builder.bind(p);
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        let list_q = format!(
            "{} {} ORDER BY e.serial_number LIMIT {} OFFSET {}",
            DETAILS_SELECT, where_clause, per_page, offset
        );
        let mut list_builder = sqlx::query_as::<_, EquipmentDetails>(&list_q);
        if let Some(status) = query.status {
            list_builder = list_builder.bind(status);
        }
        if let Some(type_id) = query.equipment_type_id {
            list_builder = list_builder.bind(type_id);
        }
        if let Some(ref p) = pattern {
            list_builder = list_builder.bind(p);
        }
        let rows = list_builder.fetch_all(&self.pool).await?;

        Ok((rows, total))
    }

    /// Equipment due for maintenance within the given window, ordered by
    /// next maintenance date
    pub async fn upcoming_maintenance(&self, days: i64) -> AppResult<Vec<EquipmentDetails>> {
        let today = Utc::now().date_naive();
        let until = today + Duration::days(days);

        let query = format!(
            r#"{}
            WHERE e.next_maintenance_date IS NOT NULL
              AND e.next_maintenance_date >= $1
              AND e.next_maintenance_date <= $2
              AND e.status != $3
            ORDER BY e.next_maintenance_date
            "#,
            DETAILS_SELECT
        );

        let rows = sqlx::query_as::<_, EquipmentDetails>(&query)
            .bind(today)
            .bind(until)
            .bind(i16::from(EquipmentStatus::Decommissioned))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
