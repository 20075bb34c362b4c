//! Catalog API server entry point.

use catalog_api::{init_tracing, serve, AppConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Catalog API v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    serve(config).await
}
