//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! Explorer tools are declared as tables in `domains/tools/definitions/`
//! and routed through `domains/tools/router.rs`. All of them share one
//! lazily built explorer client owned by this server.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    explorer::ExplorerHandle,
    prompts::PromptService,
    resources::ResourceService,
    tools::{ToolRegistry, build_tool_router},
};

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared explorer client slot.
    explorer: Arc<ExplorerHandle>,

    resource_service: Arc<ResourceService>,
    prompt_service: Arc<PromptService>,

    /// Tool router used by the rmcp transports.
    tool_router: ToolRouter<Self>,

    /// Name-based dispatch used by the HTTP transport.
    tool_registry: ToolRegistry,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// No network connection is made here; the explorer client is built on
    /// the first tool call.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let explorer = Arc::new(ExplorerHandle::new(config.explorer.clone()));

        Self {
            tool_router: build_tool_router::<Self>(explorer.clone()),
            tool_registry: ToolRegistry::new(explorer.clone()),
            resource_service: Arc::new(ResourceService::new(config.clone())),
            prompt_service: Arc::new(PromptService::new()),
            explorer,
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The explorer handle shared by every tool.
    pub fn explorer(&self) -> &Arc<ExplorerHandle> {
        &self.explorer
    }

    /// Release the explorer client. Tool calls made afterwards fail.
    pub async fn shutdown(&self) {
        info!("Shutting down {}", self.name());
        self.explorer.shutdown().await;
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Explorer failures are part of the returned result (`isError: true`);
    /// only unknown tools and malformed argument objects are errors here.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> crate::Result<serde_json::Value> {
        let result = self.tool_registry.call_tool(name, arguments).await?;
        Ok(serde_json::to_value(result)?)
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        self.resource_service
            .list_resources()
            .await
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.raw.uri,
                    "name": r.raw.name,
                    "description": r.raw.description,
                    "mimeType": r.raw.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> crate::Result<serde_json::Value> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({ "contents": result.contents }))
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<serde_json::Value> {
        self.prompt_service
            .list_prompts()
            .await
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// Get a prompt by name (for HTTP transport).
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<serde_json::Value>,
    ) -> crate::Result<serde_json::Value> {
        let args = arguments.and_then(|v| v.as_object().map(string_arguments));
        let result = self.prompt_service.get_prompt(name, args).await?;
        Ok(serde_json::json!({
            "description": result.description,
            "messages": result.messages
        }))
    }
}

/// Keep only string-valued prompt arguments.
fn string_arguments(map: &JsonObject) -> HashMap<String, String> {
    map.iter()
        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "Read-only access to the DuckChain block explorer ({}). Tools cover search, \
                 transactions, blocks, addresses, tokens, smart contracts and chain statistics. \
                 See the duckchain://api-docs resource for the full catalogue.",
                self.config.explorer.base_url
            )),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        let arguments = request.arguments.as_ref().map(string_arguments);
        self.prompt_service
            .get_prompt(&request.name, arguments)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::domains::tools::ToolError;
    use serde_json::json;
    use tokio_test::assert_err;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_for(base_url: String) -> McpServer {
        let mut config = Config::default();
        config.explorer.base_url = base_url;
        config.explorer.timeout_secs = 5;
        McpServer::new(config)
    }

    #[tokio::test]
    async fn test_new_server_is_lazy() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.list_tools().len(), 51);
        assert!(!server.explorer().is_initialized().await);
    }

    #[test]
    fn test_http_tool_list_matches_router() {
        let server = McpServer::new(Config::default());
        let listed: Vec<_> = server
            .list_tools()
            .into_iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect();
        let routed: Vec<_> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();

        assert_eq!(listed.len(), 51);
        assert!(routed.iter().all(|name| listed.contains(name)));
        assert!(
            server
                .list_tools()
                .iter()
                .all(|t| t["inputSchema"]["type"] == "object")
        );
    }

    #[test]
    fn test_info_mentions_explorer() {
        let server = McpServer::new(Config::default());
        let info = server.get_info();
        assert!(info.instructions.unwrap().contains("https://scan.duckchain.io/api/v2"));
        assert_eq!(info.server_info.name, "duckchain-mcp-server");
    }

    #[tokio::test]
    async fn test_call_tool_returns_labelled_json() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total_blocks": "12"})))
            .expect(1)
            .mount(&mock)
            .await;

        let server = server_for(format!("{}/api/v2", mock.uri()));
        let result = server.call_tool("get_blockchain_stats", json!({})).await.unwrap();

        assert_eq!(result["isError"], false);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Blockchain statistics:\n"));
        assert!(text.contains("\"total_blocks\": \"12\""));
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let server = McpServer::new(Config::default());
        let err = assert_err!(server.call_tool("get_weather", json!({})).await);
        assert!(matches!(err, Error::Tool(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_call_after_shutdown_reports_closed() {
        let server = McpServer::new(Config::default());
        server.shutdown().await;

        let result = server.call_tool("get_blockchain_stats", json!({})).await.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "Error getting blockchain stats: explorer client has been shut down"
        );
    }

    #[tokio::test]
    async fn test_http_resources_and_prompts() {
        let server = McpServer::new(Config::default());

        let resources = server.list_resources().await;
        assert_eq!(resources.len(), 3);

        let docs = server.read_resource("duckchain://api-docs").await.unwrap();
        assert!(docs["contents"][0]["text"].as_str().unwrap().contains("get_blockchain_stats"));

        assert!(server.read_resource("duckchain://missing").await.is_err());

        let prompt = server
            .get_prompt("explore_address", Some(json!({"address": "0xabc"})))
            .await
            .unwrap();
        assert!(
            prompt["messages"][0]["content"]["text"]
                .as_str()
                .unwrap()
                .contains("0xabc")
        );

        let err = assert_err!(server.get_prompt("explore_address", None).await);
        assert!(matches!(err, Error::Prompt(_)));
    }
}
