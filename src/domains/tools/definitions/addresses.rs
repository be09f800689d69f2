//! Address tools.

use super::explorer_tool::ExplorerTool;
use super::params::ParamShape;
use crate::domains::explorer::Endpoint;

pub const TOOLS: &[ExplorerTool] = &[
    ExplorerTool {
        name: "get_addresses_list",
        description: "Get the list of addresses with the highest native coin balances.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/addresses"),
        label: "Addresses list",
        action: "getting addresses list",
    },
    ExplorerTool {
        name: "get_address_details",
        description: "Get address details by hash.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}"),
        label: "Address details for {address_hash}",
        action: "getting address details",
    },
    ExplorerTool {
        name: "get_address_counters",
        description: "Get transaction, transfer, gas usage and validation counters for an address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/counters"),
        label: "Address counters for {address_hash}",
        action: "getting address counters",
    },
    ExplorerTool {
        name: "get_address_transactions",
        description: "Get transactions for a specific address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/transactions"),
        label: "Transactions for address {address_hash}",
        action: "getting address transactions",
    },
    ExplorerTool {
        name: "get_address_token_transfers",
        description: "Get token transfers for a specific address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/token-transfers"),
        label: "Token transfers for address {address_hash}",
        action: "getting address token transfers",
    },
    ExplorerTool {
        name: "get_address_internal_transactions",
        description: "Get internal transactions for a specific address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/internal-transactions"),
        label: "Internal transactions for address {address_hash}",
        action: "getting address internal transactions",
    },
    ExplorerTool {
        name: "get_address_logs",
        description: "Get logs emitted by a specific address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/logs"),
        label: "Logs for address {address_hash}",
        action: "getting address logs",
    },
    ExplorerTool {
        name: "get_address_blocks_validated",
        description: "Get blocks validated by a specific address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/blocks-validated"),
        label: "Blocks validated by address {address_hash}",
        action: "getting address blocks validated",
    },
    ExplorerTool {
        name: "get_address_token_balances",
        description: "Get all token balances for a specific address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/token-balances"),
        label: "Token balances for address {address_hash}",
        action: "getting address token balances",
    },
    ExplorerTool {
        name: "get_address_tokens",
        description: "Get tokens held by a specific address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/tokens"),
        label: "Tokens for address {address_hash}",
        action: "getting address tokens",
    },
    ExplorerTool {
        name: "get_address_coin_balance_history",
        description: "Get native coin balance history for a specific address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/coin-balance-history"),
        label: "Coin balance history for address {address_hash}",
        action: "getting address coin balance history",
    },
    ExplorerTool {
        name: "get_address_coin_balance_history_by_day",
        description: "Get native coin balance history by day for a specific address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/coin-balance-history-by-day"),
        label: "Coin balance history by day for address {address_hash}",
        action: "getting address coin balance history by day",
    },
    ExplorerTool {
        name: "get_address_withdrawals",
        description: "Get withdrawals for a specific address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/withdrawals"),
        label: "Withdrawals for address {address_hash}",
        action: "getting address withdrawals",
    },
    ExplorerTool {
        name: "get_address_nft",
        description: "Get NFTs owned by a specific address.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/nft"),
        label: "NFT for address {address_hash}",
        action: "getting address NFT",
    },
    ExplorerTool {
        name: "get_address_nft_collections",
        description: "Get NFTs owned by a specific address, grouped by collection.",
        params: ParamShape::Address,
        endpoint: Endpoint::new("/addresses/{address_hash}/nft/collections"),
        label: "NFT collections for address {address_hash}",
        action: "getting address NFT collections",
    },
];
