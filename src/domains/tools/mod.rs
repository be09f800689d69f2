//! Tools domain module.
//!
//! Every tool forwards one GET to the explorer API and returns the JSON body
//! under a short label. Failures come back as error-flagged text results of
//! the form `Error <action>: <message>`.
//!
//! ## Architecture
//!
//! - `definitions/` - Static tool tables, one file per API area
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and name-based dispatch
//! - `common.rs` - Result helpers
//! - `error.rs` - Tool-specific error types

pub mod common;
pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use definitions::{ExplorerTool, GROUPS, ToolGroup, all_tools, find_tool};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
