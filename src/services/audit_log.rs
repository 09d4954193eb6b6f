//! Audit log service

use crate::{
    error::AppResult,
    models::log_entry::{LogEntry, LogEntryQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuditLogService {
    repository: Repository,
}

impl AuditLogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &LogEntryQuery) -> AppResult<(Vec<LogEntry>, i64)> {
        self.repository.audit.list(query).await
    }

    /// Entity names present in the log (for filter dropdowns)
    pub async fn entity_names(&self) -> AppResult<Vec<String>> {
        self.repository.audit.entity_names().await
    }
}
