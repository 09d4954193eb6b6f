//! Equipment lifecycle rules
//!
//! Pure rules governing how an equipment record's status and maintenance
//! dates change in response to issue, return, and maintenance events. The
//! services invoke these inside the unit of work that persists the result,
//! so the status column is authoritative everywhere.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::{AppError, AppResult};
use crate::models::enums::{EquipmentStatus, MaintenanceResult};
use crate::models::equipment::Equipment;

/// Next maintenance date derived from a reference date and the type's
/// interval; no positive interval means no derived date
pub fn next_maintenance_date(from: NaiveDate, interval_days: i32) -> Option<NaiveDate> {
    if interval_days > 0 {
        Some(from + Duration::days(interval_days as i64))
    } else {
        None
    }
}

/// Equipment can only be issued from reserve
pub fn check_issue_allowed(status: EquipmentStatus) -> AppResult<()> {
    match status {
        EquipmentStatus::InReserve => Ok(()),
        EquipmentStatus::Decommissioned => Err(AppError::Decommissioned(
            "Decommissioned equipment cannot be issued".to_string(),
        )),
        other => Err(AppError::NotAvailable(format!(
            "Equipment is {} and cannot be issued",
            other.to_string().to_lowercase()
        ))),
    }
}

/// Maintenance cannot be recorded in the future or against decommissioned
/// equipment
pub fn check_maintenance_allowed(
    status: EquipmentStatus,
    date: NaiveDate,
    today: NaiveDate,
) -> AppResult<()> {
    if date > today {
        return Err(AppError::FutureDate(
            "Maintenance date cannot be in the future".to_string(),
        ));
    }
    if status == EquipmentStatus::Decommissioned {
        return Err(AppError::Decommissioned(
            "Cannot record maintenance for decommissioned equipment".to_string(),
        ));
    }
    Ok(())
}

/// Status the equipment lands in after a maintenance result
pub fn status_after_maintenance(result: MaintenanceResult) -> EquipmentStatus {
    match result {
        MaintenanceResult::InProgress => EquipmentStatus::UnderMaintenance,
        MaintenanceResult::Success => EquipmentStatus::InReserve,
        MaintenanceResult::NeedsReplacement => EquipmentStatus::InReserve,
        MaintenanceResult::Failed => EquipmentStatus::Decommissioned,
    }
}

/// Apply a recorded maintenance to the equipment: maintenance dates and
/// status, decommissioning on failure. Returns the log's computed next
/// maintenance date.
pub fn apply_maintenance(
    equipment: &mut Equipment,
    date: NaiveDate,
    result: MaintenanceResult,
    interval_days: i32,
    now: DateTime<Utc>,
) -> Option<NaiveDate> {
    equipment.last_maintenance_date = Some(date);

    let next = next_maintenance_date(date, interval_days);
    if next.is_some() {
        equipment.next_maintenance_date = next;
    }

    equipment.status = status_after_maintenance(result).into();
    if result == MaintenanceResult::Failed {
        equipment.decommission_date = Some(now);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn equipment(status: EquipmentStatus) -> Equipment {
        Equipment {
            id: 1,
            serial_number: "SN-0001".to_string(),
            model: None,
            equipment_type_id: 1,
            purchase_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: status.into(),
            last_maintenance_date: None,
            next_maintenance_date: None,
            decommission_date: None,
        }
    }

    #[test]
    fn next_date_adds_interval_days() {
        let purchase = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(
            next_maintenance_date(purchase, 180),
            Some(NaiveDate::from_ymd_opt(2024, 6, 29).unwrap())
        );
        assert_eq!(next_maintenance_date(purchase, 0), None);
    }

    #[test]
    fn issue_requires_reserve_status() {
        assert!(check_issue_allowed(EquipmentStatus::InReserve).is_ok());
        assert!(matches!(
            check_issue_allowed(EquipmentStatus::Decommissioned),
            Err(AppError::Decommissioned(_))
        ));
        assert!(matches!(
            check_issue_allowed(EquipmentStatus::InUse),
            Err(AppError::NotAvailable(_))
        ));
        assert!(matches!(
            check_issue_allowed(EquipmentStatus::UnderMaintenance),
            Err(AppError::NotAvailable(_))
        ));
    }

    #[test]
    fn future_maintenance_date_is_rejected() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let tomorrow = today + Duration::days(1);
        assert!(matches!(
            check_maintenance_allowed(EquipmentStatus::InReserve, tomorrow, today),
            Err(AppError::FutureDate(_))
        ));
        assert!(check_maintenance_allowed(EquipmentStatus::InReserve, today, today).is_ok());
    }

    #[test]
    fn decommissioned_equipment_rejects_maintenance() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(matches!(
            check_maintenance_allowed(EquipmentStatus::Decommissioned, today, today),
            Err(AppError::Decommissioned(_))
        ));
    }

    #[test]
    fn failed_result_decommissions_and_stamps_date() {
        let mut eq = equipment(EquipmentStatus::InReserve);
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

        apply_maintenance(&mut eq, date, MaintenanceResult::Failed, 180, now);

        assert_eq!(eq.status_enum(), EquipmentStatus::Decommissioned);
        assert_eq!(eq.decommission_date, Some(now));
        assert_eq!(eq.last_maintenance_date, Some(date));
    }

    #[test]
    fn in_progress_puts_equipment_under_maintenance() {
        let mut eq = equipment(EquipmentStatus::InUse);
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

        let next = apply_maintenance(&mut eq, date, MaintenanceResult::InProgress, 90, now);

        assert_eq!(eq.status_enum(), EquipmentStatus::UnderMaintenance);
        assert_eq!(next, Some(NaiveDate::from_ymd_opt(2024, 7, 30).unwrap()));
        assert_eq!(eq.next_maintenance_date, next);
        assert_eq!(eq.decommission_date, None);
    }

    #[test]
    fn success_and_needs_replacement_land_in_reserve() {
        for result in [MaintenanceResult::Success, MaintenanceResult::NeedsReplacement] {
            let mut eq = equipment(EquipmentStatus::UnderMaintenance);
            let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
            let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

            apply_maintenance(&mut eq, date, result, 180, now);

            assert_eq!(eq.status_enum(), EquipmentStatus::InReserve);
            assert_eq!(eq.decommission_date, None);
        }
    }

    #[test]
    fn zero_interval_keeps_previous_next_date() {
        let mut eq = equipment(EquipmentStatus::InReserve);
        eq.next_maintenance_date = Some(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

        let next = apply_maintenance(&mut eq, date, MaintenanceResult::Success, 0, now);

        assert_eq!(next, None);
        assert_eq!(
            eq.next_maintenance_date,
            Some(NaiveDate::from_ymd_opt(2024, 8, 1).unwrap())
        );
    }
}
