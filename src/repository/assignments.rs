//! Assignments repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::assignment::{AssignmentDetails, AssignmentQuery},
};

const DETAILS_SELECT: &str = r#"
    SELECT a.id, a.equipment_id, e.serial_number, e.model,
           a.user_id, u.full_name AS user_full_name, u.department,
           a.assigned_at, a.returned_at, a.assignment_notes, a.return_notes
    FROM assignments a
    JOIN equipment e ON a.equipment_id = e.id
    JOIN users u ON a.user_id = u.id
"#;

#[derive(Clone)]
pub struct AssignmentsRepository {
    pool: Pool<Postgres>,
}

impl AssignmentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get assignment with equipment and user details by ID
    pub async fn get_details(&self, id: i32) -> AppResult<AssignmentDetails> {
        let query = format!("{} WHERE a.id = $1", DETAILS_SELECT);
        sqlx::query_as::<_, AssignmentDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assignment {} not found", id)))
    }

    /// List assignments with optional filters and pagination
    pub async fn list(&self, query: &AssignmentQuery) -> AppResult<(Vec<AssignmentDetails>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(50).clamp(1, 200);
        let offset = (page - 1) * per_page;

        let mut conditions = Vec::new();
        let mut idx = 1;

        match query.active {
            Some(true) => conditions.push("a.returned_at IS NULL".to_string()),
            Some(false) => conditions.push("a.returned_at IS NOT NULL".to_string()),
            None => {}
        }
        if query.equipment_id.is_some() {
            conditions.push(format!("a.equipment_id = ${}", idx));
            idx += 1;
        }
        if query.user_id.is_some() {
            conditions.push(format!("a.user_id = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_q = format!("SELECT COUNT(*) FROM assignments a {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_q);
        if let Some(equipment_id) = query.equipment_id {
            count_builder = count_builder.bind(equipment_id);
        }
        if let Some(user_id) = query.user_id {
            count_builder = count_builder.bind(user_id);
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        let list_q = format!(
            "{} {} ORDER BY a.assigned_at DESC LIMIT {} OFFSET {}",
            DETAILS_SELECT, where_clause, per_page, offset
        );
        let mut list_builder = sqlx::query_as::<_, AssignmentDetails>(&list_q);
        if let Some(equipment_id) = query.equipment_id {
            list_builder = list_builder.bind(equipment_id);
        }
        if let Some(user_id) = query.user_id {
            list_builder = list_builder.bind(user_id);
        }
        let rows = list_builder.fetch_all(&self.pool).await?;

        Ok((rows, total))
    }

    /// Count outstanding assignments
    pub async fn count_active(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM assignments WHERE returned_at IS NULL")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
