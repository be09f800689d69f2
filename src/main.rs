//! DuckChain MCP server entry point.
//!
//! Loads configuration, initializes logging and serves the configured
//! transport. The explorer client is released before the process exits.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use duckchain_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config.logging.level);
    config.validate()?;

    info!(
        "Starting {} v{} against {}",
        config.server.name, config.server.version, config.explorer.base_url
    );

    let server = McpServer::new(config.clone());
    let transport = TransportService::new(config.transport);

    let result = transport.run(server.clone()).await;
    server.shutdown().await;
    result?;

    info!("Server stopped");
    Ok(())
}

/// Log to stderr; stdout carries the MCP protocol in stdio mode.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
