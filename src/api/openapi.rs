//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assignments, equipment, equipment_types, health, log_entries, maintenance, stats, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EquipMaster API",
        version = "1.0.0",
        description = "Equipment Inventory Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "EquipMaster Team")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipment,
        equipment::upcoming_maintenance,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::equipment_maintenance_history,
        equipment::equipment_assignment_history,
        // Equipment types
        equipment_types::list_equipment_types,
        equipment_types::get_equipment_type,
        equipment_types::create_equipment_type,
        equipment_types::update_equipment_type,
        equipment_types::delete_equipment_type,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Assignments
        assignments::list_assignments,
        assignments::get_assignment,
        assignments::issue_equipment,
        assignments::return_equipment,
        // Maintenance
        maintenance::list_maintenance_logs,
        maintenance::get_maintenance_log,
        maintenance::record_maintenance,
        maintenance::update_maintenance_log,
        // Audit log
        log_entries::list_log_entries,
        log_entries::list_log_entities,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentDetails,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            equipment::EquipmentListResponse,
            // Equipment types
            crate::models::equipment_type::EquipmentType,
            crate::models::equipment_type::CreateEquipmentType,
            crate::models::equipment_type::UpdateEquipmentType,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            users::UsersListResponse,
            // Assignments
            crate::models::assignment::Assignment,
            crate::models::assignment::AssignmentDetails,
            crate::models::assignment::IssueEquipment,
            crate::models::assignment::ReturnEquipment,
            assignments::AssignmentsListResponse,
            assignments::ReturnResponse,
            // Maintenance
            crate::models::maintenance::MaintenanceLog,
            crate::models::maintenance::MaintenanceLogDetails,
            crate::models::maintenance::CreateMaintenanceLog,
            crate::models::maintenance::UpdateMaintenanceLog,
            maintenance::MaintenanceListResponse,
            // Audit log
            crate::models::log_entry::LogEntry,
            log_entries::LogEntriesResponse,
            // Enums
            crate::models::enums::EquipmentStatus,
            crate::models::enums::MaintenanceType,
            crate::models::enums::MaintenanceResult,
            crate::models::enums::AuditAction,
            // Stats
            stats::EquipmentStats,
            stats::StatsResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Equipment management"),
        (name = "equipment-types", description = "Equipment type management"),
        (name = "users", description = "Personnel management"),
        (name = "assignments", description = "Issuing and returning equipment"),
        (name = "maintenance", description = "Maintenance log management"),
        (name = "audit", description = "Audit trail"),
        (name = "stats", description = "Statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
