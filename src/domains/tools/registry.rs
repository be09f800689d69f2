//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Name-based dispatch for tool calls (used by the HTTP transport)
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::warn;

use super::definitions::{all_tools, find_tool};
use super::error::ToolError;
use crate::domains::explorer::ExplorerHandle;

/// Tool registry - manages all available tools.
#[derive(Clone)]
pub struct ToolRegistry {
    explorer: Arc<ExplorerHandle>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by the shared explorer handle.
    pub fn new(explorer: Arc<ExplorerHandle>) -> Self {
        Self { explorer }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        all_tools().map(|tool| tool.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        all_tools().map(|tool| tool.to_tool()).collect()
    }

    /// Dispatch a tool call by name.
    ///
    /// Explorer failures come back as error-flagged results; only an unknown
    /// name or non-object arguments are errors here.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let Some(tool) = find_tool(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        let arguments = match arguments {
            serde_json::Value::Object(map) => map,
            serde_json::Value::Null => serde_json::Map::new(),
            other => {
                return Err(ToolError::invalid_arguments(format!(
                    "expected an object, got {}",
                    other
                )));
            }
        };

        Ok(tool.execute(&self.explorer, arguments).await)
    }
}
