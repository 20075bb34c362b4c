//! # Catalog API
//!
//! HTTP service over a single SQLite `products` table.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog API Startup                              │
//! │                                                                         │
//! │  1. init_tracing()          RUST_LOG or "info,catalog=debug,sqlx=warn" │
//! │  2. AppConfig::load()       CATALOG_* environment variables            │
//! │  3. Database::new()         open + ensure schema      (fatal on error) │
//! │  4. export_products()       write the workbook        (warn on error)  │
//! │  5. TcpListener::bind()                               (fatal on error) │
//! │  6. axum::serve()           until Ctrl+C / SIGTERM                     │
//! │  7. Database::close()                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;

use anyhow::Context;
use catalog_db::{Database, DbConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,catalog=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Opens the database and writes the startup workbook.
///
/// A database that can't be opened is fatal. A failed export is only
/// logged.
pub async fn prepare(config: AppConfig) -> anyhow::Result<AppState> {
    info!(path = %config.database_path.display(), "Opening database");

    let db = Database::new(DbConfig::new(&config.database_path))
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database_path.display()
            )
        })?;

    if let Err(e) = catalog_export::export_products(&db.products(), &config.workbook_path).await {
        warn!(error = %e, "Workbook export failed, continuing startup");
    }

    Ok(AppState::new(db, config))
}

/// Runs the service until a shutdown signal arrives.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let state = prepare(config).await?;
    let db = state.db.clone();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Catalog API listening on {}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

// =============================================================================
// Unit Tests
// =============================================================================
