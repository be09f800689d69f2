//! Main page feeds and chain statistics.

use super::explorer_tool::ExplorerTool;
use super::params::ParamShape;
use crate::domains::explorer::Endpoint;

pub const MAIN_PAGE_TOOLS: &[ExplorerTool] = &[
    ExplorerTool {
        name: "get_main_page_transactions",
        description: "Get the latest transactions shown on the explorer main page.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/main-page/transactions"),
        label: "Main page transactions",
        action: "getting main page transactions",
    },
    ExplorerTool {
        name: "get_main_page_blocks",
        description: "Get the latest blocks shown on the explorer main page.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/main-page/blocks"),
        label: "Main page blocks",
        action: "getting main page blocks",
    },
    ExplorerTool {
        name: "get_indexing_status",
        description: "Get the current indexing status of the blockchain.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/main-page/indexing-status"),
        label: "Indexing status",
        action: "getting indexing status",
    },
];

pub const STATS_TOOLS: &[ExplorerTool] = &[
    ExplorerTool {
        name: "get_blockchain_stats",
        description: "Get blockchain statistics and counters.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/stats"),
        label: "Blockchain statistics",
        action: "getting blockchain stats",
    },
    ExplorerTool {
        name: "get_transactions_chart",
        description: "Get transaction chart data for visualization.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/stats/charts/transactions"),
        label: "Transactions chart data",
        action: "getting transactions chart",
    },
    ExplorerTool {
        name: "get_market_chart",
        description: "Get market chart data for price and volume visualization.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/stats/charts/market"),
        label: "Market chart data",
        action: "getting market chart",
    },
];
