//! Generic explorer endpoint tool.
//!
//! Every explorer tool is one [`ExplorerTool`] value in a static table. The
//! value carries the tool metadata, the argument shape, the upstream
//! endpoint and the two phrases used to label results:
//!
//! - `label`: prefix of a successful result, may reference arguments
//!   (`"Logs for transaction {transaction_hash}"`)
//! - `action`: completes `"Error <action>: ..."` on failure
//!
//! Failures of any kind are returned as error-flagged tool results, never as
//! protocol errors.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::{debug, info};

use super::params::ParamShape;
use crate::domains::explorer::{Endpoint, ExplorerError, ExplorerHandle, interpolate};
use crate::domains::tools::common::{error_result, format_response, success_result};

/// One explorer endpoint exposed as an MCP tool.
#[derive(Debug, Clone, Copy)]
pub struct ExplorerTool {
    /// Tool name as registered in MCP.
    pub name: &'static str,

    /// Tool description shown to clients.
    pub description: &'static str,

    /// Argument list accepted by the tool.
    pub params: ParamShape,

    /// Upstream endpoint the tool forwards to.
    pub endpoint: Endpoint,

    /// Success label template.
    pub label: &'static str,

    /// Failure phrase, e.g. `"getting block details"`.
    pub action: &'static str,
}

impl ExplorerTool {
    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.params.schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Run the tool and always produce a result.
    pub async fn execute(&self, explorer: &ExplorerHandle, arguments: JsonObject) -> CallToolResult {
        match self.fetch(explorer, arguments).await {
            Ok(text) => success_result(text),
            Err(e) => {
                if let Some(status) = e.status() {
                    debug!(tool = self.name, %status, "Explorer rejected the request");
                }
                error_result(&self.error_message(&e))
            }
        }
    }

    /// Bind arguments, call the endpoint and render the labelled response.
    pub async fn fetch(
        &self,
        explorer: &ExplorerHandle,
        arguments: JsonObject,
    ) -> Result<String, ExplorerError> {
        let args = self.params.bind(arguments)?;
        let segments = self.endpoint.segments(&args)?;
        let query = self.endpoint.query_pairs(&args);

        info!(tool = self.name, path = self.endpoint.path, "Calling explorer");
        let client = explorer.client().await?;
        let value = client.request(&segments, &query).await?;
        debug!(tool = self.name, "Explorer call succeeded");

        Ok(format_response(&interpolate(self.label, &args), &value))
    }

    /// Text returned to the caller when the tool fails.
    pub fn error_message(&self, error: &ExplorerError) -> String {
        format!("Error {}: {}", self.action, error)
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(&'static self, explorer: Arc<ExplorerHandle>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(self.to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let explorer = explorer.clone();
            async move { Ok(self.execute(&explorer, args).await) }.boxed()
        })
    }
}
