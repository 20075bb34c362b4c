//! Shared application state handed to every route handler.

use std::sync::Arc;

use catalog_db::Database;

use crate::config::AppConfig;

/// Shared application state.
///
/// Cheap to clone: the database handle shares its pool and the config is
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Creates the state from an open database and the loaded config.
    pub fn new(db: Database, config: AppConfig) -> Self {
        AppState {
            db,
            config: Arc::new(config),
        }
    }
}
