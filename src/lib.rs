//! DuckChain MCP Server Library
//!
//! Exposes the DuckChain block explorer (a Blockscout v2 deployment) to MCP
//! clients as read-only tools, plus a few documentation resources and
//! research prompts.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **explorer**: HTTP client for the explorer API and its shared handle
//!   - **tools**: One MCP tool per explorer endpoint
//!   - **resources**: API catalogue, known networks, server info
//!   - **prompts**: Transaction, address and token research prompts
//!
//! # Example
//!
//! ```rust,no_run
//! use duckchain_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!
//!     let server = McpServer::new(config.clone());
//!     let result = TransportService::new(config.transport).run(server.clone()).await;
//!     server.shutdown().await;
//!     result?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
