//! Tool Router - builds the rmcp ToolRouter from the tool tables.
//!
//! This module builds the ToolRouter for STDIO/TCP transport. Each tool
//! knows how to create its own route; every route shares one explorer handle.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::all_tools;
use crate::domains::explorer::ExplorerHandle;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(explorer: Arc<ExplorerHandle>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    all_tools().fold(ToolRouter::new(), |router, tool| {
        router.with_route(tool.create_route(explorer.clone()))
    })
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::ExplorerConfig;

    struct TestServer {}

    fn test_handle() -> Arc<ExplorerHandle> {
        Arc::new(ExplorerHandle::new(ExplorerConfig::default()))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_handle());
        let tools = router.list_all();
        assert_eq!(tools.len(), 51);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"search_blockchain"));
        assert!(names.contains(&"get_transactions"));
        assert!(names.contains(&"get_block_details"));
        assert!(names.contains(&"get_address_details"));
        assert!(names.contains(&"get_token_instance_holders"));
        assert!(names.contains(&"get_smart_contract_details"));
        assert!(names.contains(&"get_market_chart"));
    }

    #[test]
    fn test_router_does_not_touch_network() {
        let handle = test_handle();
        let _router: ToolRouter<TestServer> = build_tool_router(handle.clone());
        assert_eq!(handle.constructed(), 0);
    }

    #[test]
    fn test_registry_matches_router() {
        let handle = test_handle();
        let registry = ToolRegistry::new(handle.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(handle);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
