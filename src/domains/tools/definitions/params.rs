//! Parameter structs shared by the explorer tools.
//!
//! Tools with the same argument list share one struct. The struct gives
//! the tool its input schema and validates incoming arguments before they
//! are bound to an endpoint.

use std::sync::Arc;

use rmcp::{handler::server::tool::cached_schema_for_type, model::JsonObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::domains::explorer::{Arguments, ExplorerError};

/// Tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct NoParams {}

/// Free-text search.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SearchParams {
    #[schemars(
        description = "Search term: address, token name or symbol, block number, or transaction hash"
    )]
    pub query: String,
}

/// Filters for the global transaction list.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct TransactionFilterParams {
    #[schemars(description = "Status filter: 'pending' or 'validated'")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<String>,

    #[schemars(
        description = "Transaction type, e.g. 'token_transfer', 'contract_creation', 'contract_call', 'coin_transfer', 'token_creation'"
    )]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,

    #[schemars(description = "Method name filter, e.g. 'approve' or 'transfer'")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// A single transaction.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct TransactionParams {
    #[schemars(description = "Transaction hash (0x-prefixed)")]
    pub transaction_hash: String,
}

/// Token transfers of one transaction.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct TransactionTokenTransfersParams {
    #[schemars(description = "Transaction hash (0x-prefixed)")]
    pub transaction_hash: String,

    #[schemars(description = "Token type filter, e.g. 'ERC-20', 'ERC-721', 'ERC-1155'")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Filters for the block list.
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct BlockFilterParams {
    #[schemars(description = "Block type: 'block', 'uncle' or 'reorg'")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
}

/// A single block.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct BlockParams {
    #[schemars(description = "Block number or block hash")]
    pub block_number_or_hash: String,
}

/// An address, token contract or smart contract.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct AddressParams {
    #[schemars(description = "Address hash (0x-prefixed)")]
    pub address_hash: String,
}

/// One instance (NFT id) of a token.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct TokenInstanceParams {
    #[schemars(description = "Token contract address hash (0x-prefixed)")]
    pub address_hash: String,

    #[schemars(description = "Token instance id")]
    pub instance_id: String,
}

/// Argument list of an explorer tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamShape {
    None,
    Search,
    TransactionFilter,
    Transaction,
    TransactionTokenTransfers,
    BlockFilter,
    Block,
    Address,
    TokenInstance,
}

impl ParamShape {
    /// JSON schema advertised as the tool's input schema.
    pub fn schema(self) -> Arc<JsonObject> {
        match self {
            Self::None => cached_schema_for_type::<NoParams>(),
            Self::Search => cached_schema_for_type::<SearchParams>(),
            Self::TransactionFilter => cached_schema_for_type::<TransactionFilterParams>(),
            Self::Transaction => cached_schema_for_type::<TransactionParams>(),
            Self::TransactionTokenTransfers => {
                cached_schema_for_type::<TransactionTokenTransfersParams>()
            }
            Self::BlockFilter => cached_schema_for_type::<BlockFilterParams>(),
            Self::Block => cached_schema_for_type::<BlockParams>(),
            Self::Address => cached_schema_for_type::<AddressParams>(),
            Self::TokenInstance => cached_schema_for_type::<TokenInstanceParams>(),
        }
    }

    /// Validate raw tool arguments and bind them by name.
    pub fn bind(self, arguments: JsonObject) -> Result<Arguments, ExplorerError> {
        match self {
            Self::None => bind_as::<NoParams>(arguments),
            Self::Search => bind_as::<SearchParams>(arguments),
            Self::TransactionFilter => bind_as::<TransactionFilterParams>(arguments),
            Self::Transaction => bind_as::<TransactionParams>(arguments),
            Self::TransactionTokenTransfers => {
                bind_as::<TransactionTokenTransfersParams>(arguments)
            }
            Self::BlockFilter => bind_as::<BlockFilterParams>(arguments),
            Self::Block => bind_as::<BlockParams>(arguments),
            Self::Address => bind_as::<AddressParams>(arguments),
            Self::TokenInstance => bind_as::<TokenInstanceParams>(arguments),
        }
    }
}

fn bind_as<P>(arguments: JsonObject) -> Result<Arguments, ExplorerError>
where
    P: DeserializeOwned + Serialize,
{
    let params: P = serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ExplorerError::invalid_arguments(e.to_string()))?;
    let value =
        serde_json::to_value(params).map_err(|e| ExplorerError::invalid_arguments(e.to_string()))?;
    Arguments::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_bind_required_argument() {
        let args = ParamShape::Address
            .bind(object(serde_json::json!({ "address_hash": "0xABC" })))
            .unwrap();
        assert_eq!(args.get("address_hash"), Some("0xABC"));
    }

    #[test]
    fn test_bind_missing_required_argument() {
        let err = ParamShape::TokenInstance
            .bind(object(serde_json::json!({ "address_hash": "0xTOKEN" })))
            .unwrap_err();
        assert!(err.to_string().contains("instance_id"));
    }

    #[test]
    fn test_bind_omits_unset_optionals() {
        let args = ParamShape::TransactionFilter
            .bind(object(serde_json::json!({ "filter_type": "validated", "method": null })))
            .unwrap();
        assert_eq!(args.get("filter_type"), Some("validated"));
        assert_eq!(args.get("transaction_type"), None);
        assert_eq!(args.get("method"), None);
    }

    #[test]
    fn test_bind_no_params_ignores_extras() {
        let args = ParamShape::None
            .bind(object(serde_json::json!({ "unexpected": "value" })))
            .unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn test_schema_lists_properties() {
        let schema = ParamShape::TransactionTokenTransfers.schema();
        let properties = schema
            .get("properties")
            .and_then(|p| p.as_object())
            .expect("schema has properties");
        assert!(properties.contains_key("transaction_hash"));
        assert!(properties.contains_key("token_type"));

        let required: Vec<_> = schema
            .get("required")
            .and_then(|r| r.as_array())
            .map(|r| r.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(required, vec!["transaction_hash"]);
    }
}
