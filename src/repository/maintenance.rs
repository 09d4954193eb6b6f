//! Maintenance logs repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{MaintenanceLog, MaintenanceLogDetails, MaintenanceQuery},
};

const DETAILS_SELECT: &str = r#"
    SELECT m.id, m.equipment_id, e.serial_number, m.performed_by, m.date,
           m.maintenance_type, m.description, m.cost, m.next_maintenance_date, m.result
    FROM maintenance_logs m
    JOIN equipment e ON m.equipment_id = e.id
"#;

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get maintenance log by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceLog> {
        sqlx::query_as::<_, MaintenanceLog>("SELECT * FROM maintenance_logs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance log {} not found", id)))
    }

    /// List maintenance logs with optional filters and pagination
    pub async fn list(&self, query: &MaintenanceQuery) -> AppResult<(Vec<MaintenanceLogDetails>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(50).clamp(1, 200);
        let offset = (page - 1) * per_page;

        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.equipment_id.is_some() {
            conditions.push(format!("m.equipment_id = ${}", idx));
            idx += 1;
        }
        if query.result.is_some() {
            conditions.push(format!("m.result = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_q = format!("SELECT COUNT(*) FROM maintenance_logs m {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_q);
        if let Some(equipment_id) = query.equipment_id {
            count_builder = count_builder.bind(equipment_id);
        }
        if let Some(result) = query.result {
            count_builder = count_builder.bind(result);
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        let list_q = format!(
            "{} {} ORDER BY m.date DESC, m.id DESC LIMIT {} OFFSET {}",
            DETAILS_SELECT, where_clause, per_page, offset
        );
        let mut list_builder = sqlx::query_as::<_, MaintenanceLogDetails>(&list_q);
        if let Some(equipment_id) = query.equipment_id {
            list_builder = list_builder.bind(equipment_id);
        }
        if let Some(result) = query.result {
            list_builder = list_builder.bind(result);
        }
        let rows = list_builder.fetch_all(&self.pool).await?;

        Ok((rows, total))
    }
}
