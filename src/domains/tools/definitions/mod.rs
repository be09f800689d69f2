//! Tool definitions module.
//!
//! Explorer tools are declared as static tables, one file per API area.
//! Each entry is an [`ExplorerTool`]; the generic executor in
//! `explorer_tool.rs` runs all of them.
//!
//! ## Adding a New Tool
//!
//! 1. Add an `ExplorerTool` entry to the table of its area
//! 2. If the argument list is new, add a params struct and a `ParamShape`
//!    variant in `params.rs`
//!
//! Router, registry and the API docs resource pick the entry up from
//! [`GROUPS`].

pub mod addresses;
pub mod blocks;
pub mod contracts;
mod explorer_tool;
pub mod params;
pub mod search;
pub mod stats;
pub mod tokens;
pub mod transactions;

pub use explorer_tool::ExplorerTool;
pub use params::ParamShape;

/// Tools of one API area, with the heading used in documentation.
#[derive(Debug, Clone, Copy)]
pub struct ToolGroup {
    pub title: &'static str,
    pub tools: &'static [ExplorerTool],
}

/// Every explorer tool, grouped by API area.
pub const GROUPS: &[ToolGroup] = &[
    ToolGroup {
        title: "Search",
        tools: search::TOOLS,
    },
    ToolGroup {
        title: "Transactions",
        tools: transactions::TOOLS,
    },
    ToolGroup {
        title: "Blocks",
        tools: blocks::TOOLS,
    },
    ToolGroup {
        title: "Addresses",
        tools: addresses::TOOLS,
    },
    ToolGroup {
        title: "Tokens",
        tools: tokens::TOOLS,
    },
    ToolGroup {
        title: "Smart Contracts",
        tools: contracts::TOOLS,
    },
    ToolGroup {
        title: "Main Page",
        tools: stats::MAIN_PAGE_TOOLS,
    },
    ToolGroup {
        title: "Statistics",
        tools: stats::STATS_TOOLS,
    },
];

/// Iterate over all explorer tools in documentation order.
pub fn all_tools() -> impl Iterator<Item = &'static ExplorerTool> {
    GROUPS.iter().flat_map(|group| group.tools.iter())
}

/// Look up a tool by its MCP name.
pub fn find_tool(name: &str) -> Option<&'static ExplorerTool> {
    all_tools().find(|tool| tool.name == name)
}
