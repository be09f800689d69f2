//! Server info resource definition.

use super::{DynamicResourceProvider, ResourceDefinition};
use crate::core::config::Config;
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use rmcp::model::ResourceContents;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "duckchain://server-info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Server version and the explorer API it is connected to";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl DynamicResourceProvider for ServerInfoResource {
    fn resolve(uri: &str, config: &Config) -> Result<ResourceContents, ResourceError> {
        let info = serde_json::json!({
            "server": config.server.name,
            "version": config.server.version,
            "explorer": {
                "base_url": config.explorer.base_url,
                "timeout_secs": config.explorer.timeout_secs,
            },
            "tools": crate::domains::tools::all_tools().count(),
        });

        Ok(ResourceContents::text(
            serde_json::to_string_pretty(&info).map_err(|e| ResourceError::internal(e.to_string()))?,
            uri,
        ))
    }
}
