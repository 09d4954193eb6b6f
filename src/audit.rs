//! Audit trail recorder
//!
//! Every unit of work stages its mutations as field-level [`EntityChange`]
//! records. At commit time the recorder turns that change set into
//! human-readable [`NewLogEntry`] rows which are written inside the same
//! transaction as the mutations themselves. Log entries are synthesized only
//! from domain entity changes, so writing them never produces further
//! entries.

use chrono::{DateTime, Utc};
use std::env;

use crate::models::{assignment::Assignment, enums::AuditAction, log_entry::NewLogEntry};

/// Change kinds tracked by a unit of work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
}

/// A single field transition captured for a modified entity
#[derive(Debug, Clone)]
pub struct FieldChange {
    pub field: &'static str,
    pub old: String,
    pub new: String,
}

/// One tracked entity mutation
#[derive(Debug, Clone)]
pub struct EntityChange {
    pub entity: &'static str,
    pub entity_id: i32,
    pub kind: ChangeKind,
    /// Fields that actually changed (Modified only)
    pub changed: Vec<FieldChange>,
    /// Full field snapshot: current values for Added/Modified, original
    /// values for Deleted
    pub snapshot: Vec<(&'static str, String)>,
}

/// Implemented by every audited entity. `fields` lists the non-key fields
/// with their rendered values, in declaration order.
pub trait AuditEntity {
    const ENTITY: &'static str;

    fn entity_id(&self) -> i32;
    fn fields(&self) -> Vec<(&'static str, String)>;
}

impl EntityChange {
    pub fn created<E: AuditEntity>(entity: &E) -> Self {
        Self {
            entity: E::ENTITY,
            entity_id: entity.entity_id(),
            kind: ChangeKind::Added,
            changed: Vec::new(),
            snapshot: entity.fields(),
        }
    }

    pub fn modified<E: AuditEntity>(before: &E, after: &E) -> Self {
        let old_fields = before.fields();
        let new_fields = after.fields();
        let changed = old_fields
            .iter()
            .zip(new_fields.iter())
            .filter(|((_, old), (_, new))| old != new)
            .map(|((field, old), (_, new))| FieldChange {
                field,
                old: old.clone(),
                new: new.clone(),
            })
            .collect();

        Self {
            entity: E::ENTITY,
            entity_id: after.entity_id(),
            kind: ChangeKind::Modified,
            changed,
            snapshot: new_fields,
        }
    }

    pub fn deleted<E: AuditEntity>(entity: &E) -> Self {
        Self {
            entity: E::ENTITY,
            entity_id: entity.entity_id(),
            kind: ChangeKind::Deleted,
            changed: Vec::new(),
            snapshot: entity.fields(),
        }
    }

    fn field_value(&self, name: &str) -> Option<&str> {
        self.snapshot
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Classify the change. A modified Assignment whose `returned_at` went
    /// from unset to set is a Return, not an Update.
    pub fn action(&self) -> AuditAction {
        match self.kind {
            ChangeKind::Added => AuditAction::Create,
            ChangeKind::Deleted => AuditAction::Delete,
            ChangeKind::Modified => {
                if self.entity == Assignment::ENTITY {
                    let returned = self
                        .changed
                        .iter()
                        .any(|fc| fc.field == "returned_at" && fc.old.is_empty() && !fc.new.is_empty());
                    if returned {
                        return AuditAction::Return;
                    }
                }
                AuditAction::Update
            }
        }
    }
}

fn join_fields(fields: &[(&'static str, String)]) -> String {
    fields
        .iter()
        .map(|(field, value)| format!("{}: {}", field, value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the human-readable details line for one change
pub fn render_details(change: &EntityChange, username: &str) -> String {
    match change.action() {
        AuditAction::Return => {
            let equipment_id = change.field_value("equipment_id").unwrap_or("unknown");
            format!("Equipment (ID: {}) returned by {}.", equipment_id, username)
        }
        AuditAction::Create => {
            let mut details = format!(
                "Created new {} record (ID: {})",
                change.entity, change.entity_id
            );
            if !change.snapshot.is_empty() {
                details.push_str(&format!(". Fields: {}", join_fields(&change.snapshot)));
            }
            details
        }
        AuditAction::Delete => {
            let mut details = format!(
                "Deleted {} record (ID: {})",
                change.entity, change.entity_id
            );
            if !change.snapshot.is_empty() {
                details.push_str(&format!(
                    ". State before deletion: {}",
                    join_fields(&change.snapshot)
                ));
            }
            details
        }
        AuditAction::Update => {
            if change.changed.is_empty() {
                format!("{} record (ID: {}) updated", change.entity, change.entity_id)
            } else {
                let fields = change
                    .changed
                    .iter()
                    .map(|fc| format!("{}: {} -> {}", fc.field, fc.old, fc.new))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "Changed {} fields (ID: {}): {}",
                    change.entity, change.entity_id, fields
                )
            }
        }
    }
}

/// Synthesize one log entry per change, in change order, all sharing the
/// batch timestamp.
pub fn build_entries(
    changes: &[EntityChange],
    username: &str,
    timestamp: DateTime<Utc>,
) -> Vec<NewLogEntry> {
    changes
        .iter()
        .map(|change| NewLogEntry {
            action: change.action().as_str().to_string(),
            username: username.to_string(),
            entity_name: change.entity.to_string(),
            details: render_details(change, username),
            timestamp,
        })
        .collect()
}

/// Render an optional field value; unset renders as empty
pub fn opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// Operating-system account name of the server process, used when the
/// caller supplied no identity
pub fn os_username() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "system".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Widget {
        id: i32,
        name: String,
        size: Option<i32>,
    }

    impl AuditEntity for Widget {
        const ENTITY: &'static str = "Widget";

        fn entity_id(&self) -> i32 {
            self.id
        }

        fn fields(&self) -> Vec<(&'static str, String)> {
            vec![("name", self.name.clone()), ("size", opt(&self.size))]
        }
    }

    fn assignment(id: i32, returned_at: Option<DateTime<Utc>>) -> Assignment {
        Assignment {
            id,
            equipment_id: 42,
            user_id: 7,
            assigned_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            returned_at,
            assignment_notes: None,
            return_notes: None,
        }
    }

    #[test]
    fn create_lists_non_key_fields() {
        let w = Widget { id: 5, name: "probe".into(), size: Some(3) };
        let change = EntityChange::created(&w);
        assert_eq!(change.action(), AuditAction::Create);
        assert_eq!(
            render_details(&change, "alice"),
            "Created new Widget record (ID: 5). Fields: name: probe, size: 3"
        );
    }

    #[test]
    fn delete_lists_prior_state() {
        let w = Widget { id: 5, name: "probe".into(), size: None };
        let change = EntityChange::deleted(&w);
        assert_eq!(change.action(), AuditAction::Delete);
        assert_eq!(
            render_details(&change, "alice"),
            "Deleted Widget record (ID: 5). State before deletion: name: probe, size: "
        );
    }

    #[test]
    fn update_lists_only_changed_fields() {
        let before = Widget { id: 5, name: "probe".into(), size: Some(3) };
        let after = Widget { id: 5, name: "sensor".into(), size: Some(3) };
        let change = EntityChange::modified(&before, &after);
        assert_eq!(change.action(), AuditAction::Update);
        assert_eq!(
            render_details(&change, "alice"),
            "Changed Widget fields (ID: 5): name: probe -> sensor"
        );
    }

    #[test]
    fn noop_update_renders_generic_message() {
        let before = Widget { id: 5, name: "probe".into(), size: None };
        let after = Widget { id: 5, name: "probe".into(), size: None };
        let change = EntityChange::modified(&before, &after);
        assert!(change.changed.is_empty());
        assert_eq!(render_details(&change, "alice"), "Widget record (ID: 5) updated");
    }

    #[test]
    fn assignment_return_is_classified_as_return() {
        let before = assignment(9, None);
        let after = assignment(9, Some(Utc.with_ymd_and_hms(2024, 3, 5, 17, 0, 0).unwrap()));
        let change = EntityChange::modified(&before, &after);
        assert_eq!(change.action(), AuditAction::Return);
        assert_eq!(
            render_details(&change, "bob"),
            "Equipment (ID: 42) returned by bob."
        );
    }

    #[test]
    fn assignment_note_edit_stays_an_update() {
        let mut before = assignment(9, None);
        let mut after = assignment(9, None);
        before.assignment_notes = Some("old".into());
        after.assignment_notes = Some("new".into());
        let change = EntityChange::modified(&before, &after);
        assert_eq!(change.action(), AuditAction::Update);
    }

    #[test]
    fn batch_shares_timestamp_and_preserves_order() {
        let a = Widget { id: 1, name: "a".into(), size: None };
        let b = Widget { id: 2, name: "b".into(), size: None };
        let changes = vec![EntityChange::created(&a), EntityChange::deleted(&b)];
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let entries = build_entries(&changes, "carol", now);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, "Create");
        assert_eq!(entries[1].action, "Delete");
        assert!(entries.iter().all(|e| e.timestamp == now));
        assert!(entries.iter().all(|e| e.username == "carol"));
    }
}
