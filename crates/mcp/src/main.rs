use std::sync::Arc;

use anyhow::Result;
use rmcp::{transport::stdio, ServiceExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

use frota_core::config::{AppConfig, LoadOptions};
use frota_db::SqlVehicleRepository;
use frota_mcp::CatalogMcpServer;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the MCP transport, so all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(LoadOptions::default())?;
    info!(database_url = %config.database.url, "starting catalog MCP server");

    let pool = frota_db::connect_with_settings(
        &config.database.url,
        config.database.max_connections,
        config.database.timeout_secs,
    )
    .await?;
    frota_db::migrations::run_pending(&pool).await?;

    let server = CatalogMcpServer::new(Arc::new(SqlVehicleRepository::new(pool)));
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    info!("catalog MCP server shut down");
    Ok(())
}
