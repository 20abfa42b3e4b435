//! API routes and handlers
//!
//! This module defines all API endpoints and their routing.

use axum::Router;

use crate::AppState;

mod departments;
mod employees;
mod health;

pub use health::*;

/// Create the full API router (resources + health checks)
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health::routes())
        .nest("/api/employees", employees::routes())
        .nest("/api/departments", departments::routes())
}
