//! Smart contract tools.

use super::explorer_tool::ExplorerTool;
use super::params::ParamShape;
use crate::domains::explorer::Endpoint;

pub const TOOLS: &[ExplorerTool] = &[
    ExplorerTool {
        name: "get_smart_contracts_list",
        description: "Get the list of verified smart contracts.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/smart-contracts"),
        label: "Smart contracts list",
        action: "getting smart contracts list",
    },
    ExplorerTool {
        name: "get_smart_contracts_counters",
        description: "Get counters of total and verified smart contracts.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/smart-contracts/counters"),
        label: "Smart contracts counters",
        action: "getting smart contracts counters",
    },
    ExplorerTool {
        name: "get_smart_contract_details",
        description: "Get smart contract details (source, ABI, compiler settings) by address hash.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/smart-contracts/{address_hash}"),
        label: "Smart contract details for {address_hash}",
        action: "getting smart contract details",
    },
];
