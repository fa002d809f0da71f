//! Application state shared across all request handlers.
//!
//! The state is constructed once during startup and cloned for each request
//! through Axum's state extraction; all fields are cheap to clone (the
//! database handle shares its pool, the rest are reference-counted).

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tera::Tera;

use crate::config::Config;

/// Shared resources available to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,
    /// Template engine with all filters registered.
    pub templates: Arc<Tera>,
    /// Resolved application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates the application state from its startup-initialized parts.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `templates` - Template engine built by the view layer
    /// - `config` - Resolved configuration
    ///
    /// # Returns
    /// - `AppState` - State ready to hand to the router
    pub fn new(db: DatabaseConnection, templates: Arc<Tera>, config: Arc<Config>) -> Self {
        Self {
            db,
            templates,
            config,
        }
    }
}
