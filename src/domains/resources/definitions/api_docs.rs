//! API documentation resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;
use crate::domains::tools::GROUPS;

/// Catalogue of the explorer tools (Markdown), generated from the tool tables.
pub struct ApiDocsResource;

impl ResourceDefinition for ApiDocsResource {
    const URI: &'static str = "duckchain://api-docs";
    const NAME: &'static str = "API Documentation";
    const DESCRIPTION: &'static str = "Blockscout API v2 tools exposed by this server";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(render())
    }
}

fn render() -> String {
    let mut doc = String::from(
        "# DuckChain MCP Server - Blockscout API v2 Integration\n\n\
         Every tool issues one GET request to the explorer API and returns the JSON \
         response under a short label. Failures are returned as `Error <action>: <message>`.\n",
    );

    for group in GROUPS {
        doc.push_str(&format!("\n## {}\n\n", group.title));
        for tool in group.tools {
            doc.push_str(&format!(
                "- `{}`: {} (`GET {}`)\n",
                tool.name, tool.description, tool.endpoint.path
            ));
        }
    }

    doc.push_str(
        "\n## Configuration\n\n\
         - `MCP_EXPLORER_URL`: explorer API base URL (default `https://scan.duckchain.io/api/v2`)\n\
         - `MCP_EXPLORER_TIMEOUT`: request timeout in seconds (default 30)\n",
    );
    doc
}
