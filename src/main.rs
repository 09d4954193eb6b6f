//! EquipMaster Server - Equipment Inventory Management System
//!
//! A Rust REST API server for equipment inventory management.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use equipmaster_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            format!("equipmaster_server={},tower_http=debug", config.logging.level).into()
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting EquipMaster Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool; without the datastore no operation
    // can proceed, so startup failure is fatal
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route(
            "/equipment/upcoming-maintenance",
            get(api::equipment::upcoming_maintenance),
        )
        .route("/equipment/:id", get(api::equipment::get_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        .route(
            "/equipment/:id/maintenance",
            get(api::equipment::equipment_maintenance_history),
        )
        .route(
            "/equipment/:id/assignments",
            get(api::equipment::equipment_assignment_history),
        )
        // Equipment types
        .route("/equipment-types", get(api::equipment_types::list_equipment_types))
        .route("/equipment-types", post(api::equipment_types::create_equipment_type))
        .route("/equipment-types/:id", get(api::equipment_types::get_equipment_type))
        .route("/equipment-types/:id", put(api::equipment_types::update_equipment_type))
        .route("/equipment-types/:id", delete(api::equipment_types::delete_equipment_type))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        // Assignments
        .route("/assignments", get(api::assignments::list_assignments))
        .route("/assignments", post(api::assignments::issue_equipment))
        .route("/assignments/:id", get(api::assignments::get_assignment))
        .route("/assignments/:id/return", post(api::assignments::return_equipment))
        // Maintenance
        .route("/maintenance-logs", get(api::maintenance::list_maintenance_logs))
        .route("/maintenance-logs", post(api::maintenance::record_maintenance))
        .route("/maintenance-logs/:id", get(api::maintenance::get_maintenance_log))
        .route("/maintenance-logs/:id", put(api::maintenance::update_maintenance_log))
        // Audit log
        .route("/log-entries", get(api::log_entries::list_log_entries))
        .route("/log-entries/entities", get(api::log_entries::list_log_entities))
        // Statistics
        .route("/stats", get(api::stats::get_stats))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
