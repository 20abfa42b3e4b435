//! Admin Portal Library
//!
//! This crate provides the core functionality for the Admin Portal backend:
//! employee and department management over a REST API.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod utils;

pub use config::AppConfig;
pub use db::DbPool;
use services::{DepartmentService, EmployeeService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Database connection pool
    pub db: DbPool,
    /// Employee operations over `db`
    pub employees: EmployeeService,
    /// Department operations over `db`
    pub departments: DepartmentService,
}

impl AppState {
    /// Build the state and the services over `db`
    pub fn new(config: AppConfig, db: DbPool) -> Self {
        Self {
            employees: EmployeeService::new(db.clone()),
            departments: DepartmentService::new(db.clone()),
            config,
            db,
        }
    }
}
