use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::serve;
use tokio::net::TcpListener;
use tracing::info;

use tkani_catalog_api::create_app;
use tkani_store::CatalogStore;
use tkani_utils::{init_logging, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    // Initialize logging
    init_logging(&config.logging)?;
    info!("Starting Tkani Catalog API");

    // Initialize the catalog
    let store = Arc::new(CatalogStore::new());
    if config.catalog.seed_demo_data {
        let seeded = store.create_many(tkani_store::demo_fabrics()).await;
        info!("Seeded catalog with {} demo fabrics", seeded.len());
    }

    // Build application router
    let app = create_app(store, &config);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = TcpListener::bind(&addr).await?;
    info!("Catalog API listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}
