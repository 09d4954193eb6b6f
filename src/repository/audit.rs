//! Audit log repository for database operations
//!
//! Read-only: log entries are appended exclusively by the unit of work at
//! commit time.

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::log_entry::{LogEntry, LogEntryQuery},
};

#[derive(Clone)]
pub struct AuditRepository {
    pool: Pool<Postgres>,
}

impl AuditRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List log entries, newest first, with optional filters and pagination
    pub async fn list(&self, query: &LogEntryQuery) -> AppResult<(Vec<LogEntry>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(50).clamp(1, 200);
        let offset = (page - 1) * per_page;

        let mut conditions = Vec::new();
        let mut idx = 1;

        if query.action.is_some() {
            conditions.push(format!("action = ${}", idx));
            idx += 1;
        }
        if query.entity.is_some() {
            conditions.push(format!("entity_name = ${}", idx));
            idx += 1;
        }
        if query.username.is_some() {
            conditions.push(format!("username = ${}", idx));
            idx += 1;
        }
        if query.search.is_some() {
            conditions.push(format!("details ILIKE ${}", idx));
            idx += 1;
        }
        if query.start_date.is_some() {
            conditions.push(format!("timestamp >= ${}::date", idx));
            idx += 1;
        }
        if query.end_date.is_some() {
            conditions.push(format!("timestamp < ${}::date + INTERVAL '1 day'", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let pattern = query.search.as_ref().map(|s| format!("%{}%", s));

        macro_rules! bind_filters {
            ($builder:expr) => {{
                let mut b = $builder;
                if let Some(ref action) = query.action {
                    b = b.bind(action);
                }
                if let Some(ref entity) = query.entity {
                    b = b.bind(entity);
                }
                if let Some(ref username) = query.username {
                    b = b.bind(username);
                }
                if let Some(ref p) = pattern {
                    b = b.bind(p);
                }
                if let Some(start) = query.start_date {
                    b = b.bind(start);
                }
                if let Some(end) = query.end_date {
                    b = b.bind(end);
                }
                b
            }};
        }

        let count_q = format!("SELECT COUNT(*) FROM log_entries {}", where_clause);
        let total = bind_filters!(sqlx::query_scalar::<_, i64>(&count_q))
            .fetch_one(&self.pool)
            .await?;

        let list_q = format!(
            "SELECT * FROM log_entries {} ORDER BY timestamp DESC, id DESC LIMIT {} OFFSET {}",
            where_clause, per_page, offset
        );
        let rows = bind_filters!(sqlx::query_as::<_, LogEntry>(&list_q))
            .fetch_all(&self.pool)
            .await?;

        Ok((rows, total))
    }

    /// Distinct entity names present in the audit log (for filter dropdowns)
    pub async fn entity_names(&self) -> AppResult<Vec<String>> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT entity_name FROM log_entries ORDER BY entity_name")
                .fetch_all(&self.pool)
                .await?;
        Ok(names)
    }
}
