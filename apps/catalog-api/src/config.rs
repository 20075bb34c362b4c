//! Catalog API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. With nothing set, the service behaves exactly like the fixed
//! constants it started from: `database.db`, `Book1.xlsx`, port 8080.

use std::env;
use std::path::PathBuf;

use catalog_export::DEFAULT_WORKBOOK_PATH;

/// Default SQLite file.
pub const DEFAULT_DATABASE_PATH: &str = "database.db";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Catalog API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file (`CATALOG_DB_PATH`)
    pub database_path: PathBuf,

    /// Workbook written at startup (`CATALOG_WORKBOOK_PATH`)
    pub workbook_path: PathBuf,

    /// Listen address (`CATALOG_BIND_ADDR`)
    pub bind_addr: String,

    /// HTTP port (`CATALOG_PORT`)
    pub port: u16,

    /// Report create-product success and failure with swapped status codes,
    /// matching the behavior of the service this one replaces
    /// (`CATALOG_LEGACY_CREATE_STATUS`)
    pub legacy_inverted_create_status: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            workbook_path: PathBuf::from(DEFAULT_WORKBOOK_PATH),
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            legacy_inverted_create_status: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let config = AppConfig {
            database_path: lookup("CATALOG_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),

            workbook_path: lookup("CATALOG_WORKBOOK_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.workbook_path),

            bind_addr: lookup("CATALOG_BIND_ADDR").unwrap_or(defaults.bind_addr),

            port: match lookup("CATALOG_PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("CATALOG_PORT".to_string()))?,
                None => defaults.port,
            },

            legacy_inverted_create_status: match lookup("CATALOG_LEGACY_CREATE_STATUS") {
                Some(raw) => raw.trim().parse().map_err(|_| {
                    ConfigError::InvalidValue("CATALOG_LEGACY_CREATE_STATUS".to_string())
                })?,
                None => defaults.legacy_inverted_create_status,
            },
        };

        Ok(config)
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
