//! Search tools.

use super::explorer_tool::ExplorerTool;
use super::params::ParamShape;
use crate::domains::explorer::{Endpoint, QueryParam};

pub const TOOLS: &[ExplorerTool] = &[
    ExplorerTool {
        name: "search_blockchain",
        description: "Search for addresses, tokens, blocks, or transactions on the blockchain.",
        params: ParamShape::Search,
        endpoint: Endpoint::with_query("/search", &[QueryParam::required("q", "query")]),
        label: "Search results for '{query}'",
        action: "searching blockchain",
    },
    ExplorerTool {
        name: "check_search_redirect",
        description: "Check if a search query should redirect to a specific page (address, block, transaction or token).",
        params: ParamShape::Search,
        endpoint: Endpoint::with_query("/search/check-redirect", &[QueryParam::required("q", "query")]),
        label: "Search redirect check for '{query}'",
        action: "checking search redirect",
    },
];
