//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Equipment status codes (stored in equipment.status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum EquipmentStatus {
    InUse = 0,
    InReserve = 1,
    UnderMaintenance = 2,
    Decommissioned = 3,
}

impl From<i16> for EquipmentStatus {
    fn from(v: i16) -> Self {
        match v {
            0 => EquipmentStatus::InUse,
            2 => EquipmentStatus::UnderMaintenance,
            3 => EquipmentStatus::Decommissioned,
            _ => EquipmentStatus::InReserve,
        }
    }
}

impl From<EquipmentStatus> for i16 {
    fn from(s: EquipmentStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentStatus::InUse => "In use",
            EquipmentStatus::InReserve => "In reserve",
            EquipmentStatus::UnderMaintenance => "Under maintenance",
            EquipmentStatus::Decommissioned => "Decommissioned",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceType
// ---------------------------------------------------------------------------

/// Maintenance type codes (stored in maintenance_logs.maintenance_type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum MaintenanceType {
    Planned = 0,
    Unplanned = 1,
    Repair = 2,
}

impl From<i16> for MaintenanceType {
    fn from(v: i16) -> Self {
        match v {
            1 => MaintenanceType::Unplanned,
            2 => MaintenanceType::Repair,
            _ => MaintenanceType::Planned,
        }
    }
}

impl From<MaintenanceType> for i16 {
    fn from(t: MaintenanceType) -> Self {
        t as i16
    }
}

impl std::fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceType::Planned => "Planned",
            MaintenanceType::Unplanned => "Unplanned",
            MaintenanceType::Repair => "Repair",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceResult
// ---------------------------------------------------------------------------

/// Maintenance result codes (stored in maintenance_logs.result)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
pub enum MaintenanceResult {
    InProgress = 0,
    Success = 1,
    NeedsReplacement = 2,
    Failed = 3,
}

impl From<i16> for MaintenanceResult {
    fn from(v: i16) -> Self {
        match v {
            1 => MaintenanceResult::Success,
            2 => MaintenanceResult::NeedsReplacement,
            3 => MaintenanceResult::Failed,
            _ => MaintenanceResult::InProgress,
        }
    }
}

impl From<MaintenanceResult> for i16 {
    fn from(r: MaintenanceResult) -> Self {
        r as i16
    }
}

impl std::fmt::Display for MaintenanceResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceResult::InProgress => "In progress",
            MaintenanceResult::Success => "Success",
            MaintenanceResult::NeedsReplacement => "Needs replacement",
            MaintenanceResult::Failed => "Failed",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Audit action kinds (stored as text in log_entries.action)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Return,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "Create",
            AuditAction::Update => "Update",
            AuditAction::Delete => "Delete",
            AuditAction::Return => "Return",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
