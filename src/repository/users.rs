//! Users (personnel) repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::user::{User, UserQuery},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// List users with optional search and pagination
    pub async fn list(&self, query: &UserQuery) -> AppResult<(Vec<User>, i64)> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query.per_page.unwrap_or(50).clamp(1, 200);
        let offset = (page - 1) * per_page;

        let where_clause = if query.search.is_some() {
            "WHERE full_name ILIKE $1 OR department ILIKE $1"
        } else {
            ""
        };

        let pattern = query.search.as_ref().map(|s| format!("%{}%", s));

        let count_q = format!("SELECT COUNT(*) FROM users {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_q);
        if let Some(ref p) = pattern {
            count_builder = count_builder.bind(p);
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        let list_q = format!(
            "SELECT * FROM users {} ORDER BY full_name LIMIT {} OFFSET {}",
            where_clause, per_page, offset
        );
        let mut list_builder = sqlx::query_as::<_, User>(&list_q);
        if let Some(ref p) = pattern {
            list_builder = list_builder.bind(p);
        }
        let rows = list_builder.fetch_all(&self.pool).await?;

        Ok((rows, total))
    }
}
