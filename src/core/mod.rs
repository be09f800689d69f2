//! Core module containing shared infrastructure components.
//!
//! Error handling, configuration, the MCP server handler and the transport
//! layer live here; explorer-specific logic lives under `domains`.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
