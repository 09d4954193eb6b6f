//! EquipMaster Equipment Inventory Management System
//!
//! A Rust implementation of the EquipMaster equipment inventory server,
//! providing a REST JSON API for tracking physical assets, their assignment
//! to personnel, their maintenance schedule and history, and the audit trail
//! of every change.

use std::sync::Arc;

pub mod api;
pub mod audit;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
