//! Token and token instance (NFT) tools.

use super::explorer_tool::ExplorerTool;
use super::params::ParamShape;
use crate::domains::explorer::Endpoint;

pub const TOOLS: &[ExplorerTool] = &[
    ExplorerTool {
        name: "get_tokens_list",
        description: "Get the list of tokens known to the explorer.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/tokens"),
        label: "Tokens list",
        action: "getting tokens list",
    },
    ExplorerTool {
        name: "get_token_details",
        description: "Get token details by contract address hash.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/tokens/{address_hash}"),
        label: "Token details for {address_hash}",
        action: "getting token details",
    },
    ExplorerTool {
        name: "get_token_transfers_by_token",
        description: "Get transfers of a specific token.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/tokens/{address_hash}/transfers"),
        label: "Transfers for token {address_hash}",
        action: "getting token transfers",
    },
    ExplorerTool {
        name: "get_token_holders",
        description: "Get holders of a specific token.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/tokens/{address_hash}/holders"),
        label: "Holders for token {address_hash}",
        action: "getting token holders",
    },
    ExplorerTool {
        name: "get_token_counters",
        description: "Get holder and transfer counters for a specific token.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/tokens/{address_hash}/counters"),
        label: "Counters for token {address_hash}",
        action: "getting token counters",
    },
    ExplorerTool {
        name: "get_token_instances",
        description: "Get instances (NFTs) of a specific token.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/tokens/{address_hash}/instances"),
        label: "Instances for token {address_hash}",
        action: "getting token instances",
    },
    ExplorerTool {
        name: "get_token_instance_details",
        description: "Get details of a specific token instance.",
        params: ParamShape::TokenInstance,
        endpoint: Endpoint::new("/tokens/{address_hash}/instances/{instance_id}"),
        label: "Token instance details for {address_hash}/{instance_id}",
        action: "getting token instance details",
    },
    ExplorerTool {
        name: "get_token_instance_transfers",
        description: "Get transfers of a specific token instance.",
        params: ParamShape::TokenInstance,
        endpoint: Endpoint::new("/tokens/{address_hash}/instances/{instance_id}/transfers"),
        label: "Transfers for token instance {address_hash}/{instance_id}",
        action: "getting token instance transfers",
    },
    ExplorerTool {
        name: "get_token_instance_holders",
        description: "Get holders of a specific token instance.",
        params: ParamShape::TokenInstance,
        endpoint: Endpoint::new("/tokens/{address_hash}/instances/{instance_id}/holders"),
        label: "Holders for token instance {address_hash}/{instance_id}",
        action: "getting token instance holders",
    },
    ExplorerTool {
        name: "get_token_instance_transfers_count",
        description: "Get the number of transfers of a specific token instance.",
        params: ParamShape::TokenInstance,
        endpoint: Endpoint::new("/tokens/{address_hash}/instances/{instance_id}/transfers-count"),
        label: "Transfers count for token instance {address_hash}/{instance_id}",
        action: "getting token instance transfers count",
    },
    ExplorerTool {
        name: "refetch_token_instance_metadata",
        description: "Ask the explorer to refetch metadata for a specific token instance.",
        params: ParamShape::TokenInstance,
        endpoint: Endpoint::new("/tokens/{address_hash}/instances/{instance_id}/refetch-metadata"),
        label: "Metadata refetch result for token instance {address_hash}/{instance_id}",
        action: "refetching token instance metadata",
    },
];
