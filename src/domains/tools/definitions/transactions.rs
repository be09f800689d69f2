//! Transaction tools, including the network-wide token transfer and
//! internal transaction feeds.

use super::explorer_tool::ExplorerTool;
use super::params::ParamShape;
use crate::domains::explorer::{Endpoint, QueryParam};

pub const TOOLS: &[ExplorerTool] = &[
    ExplorerTool {
        name: "get_transactions",
        description: "Get transactions with optional filtering by status (pending/validated), type, or method.",
        params: ParamShape::TransactionFilter,
        endpoint: Endpoint::with_query(
            "/transactions",
            &[
                QueryParam::new("filter", "filter_type"),
                QueryParam::new("type", "transaction_type"),
                QueryParam::new("method", "method"),
            ],
        ),
        label: "Transactions",
        action: "getting transactions",
    },
    ExplorerTool {
        name: "get_transaction_details",
        description: "Get detailed information about a specific transaction by its hash.",
        params: ParamShape::Transaction,
        endpoint: Endpoint::new("/transactions/{transaction_hash}"),
        label: "Transaction details for {transaction_hash}",
        action: "getting transaction details",
    },
    ExplorerTool {
        name: "get_transaction_token_transfers",
        description: "Get token transfers for a specific transaction, optionally filtered by token type.",
        params: ParamShape::TransactionTokenTransfers,
        endpoint: Endpoint::with_query(
            "/transactions/{transaction_hash}/token-transfers",
            &[QueryParam::new("type", "token_type")],
        ),
        label: "Token transfers for transaction {transaction_hash}",
        action: "getting transaction token transfers",
    },
    ExplorerTool {
        name: "get_transaction_internal_transactions",
        description: "Get internal transactions for a specific transaction.",
        params: ParamShape::Transaction,
        endpoint: Endpoint::new("/transactions/{transaction_hash}/internal-transactions"),
        label: "Internal transactions for transaction {transaction_hash}",
        action: "getting transaction internal transactions",
    },
    ExplorerTool {
        name: "get_transaction_logs",
        description: "Get logs for a specific transaction.",
        params: ParamShape::Transaction,
        endpoint: Endpoint::new("/transactions/{transaction_hash}/logs"),
        label: "Logs for transaction {transaction_hash}",
        action: "getting transaction logs",
    },
    ExplorerTool {
        name: "get_transaction_raw_trace",
        description: "Get raw trace for a specific transaction.",
        params: ParamShape::Transaction,
        endpoint: Endpoint::new("/transactions/{transaction_hash}/raw-trace"),
        label: "Raw trace for transaction {transaction_hash}",
        action: "getting transaction raw trace",
    },
    ExplorerTool {
        name: "get_transaction_state_changes",
        description: "Get state changes for a specific transaction.",
        params: ParamShape::Transaction,
        endpoint: Endpoint::new("/transactions/{transaction_hash}/state-changes"),
        label: "State changes for transaction {transaction_hash}",
        action: "getting transaction state changes",
    },
    ExplorerTool {
        name: "get_transaction_summary",
        description: "Get a human-readable summary for a specific transaction.",
        params: ParamShape::Transaction,
        endpoint: Endpoint::new("/transactions/{transaction_hash}/summary"),
        label: "Summary for transaction {transaction_hash}",
        action: "getting transaction summary",
    },
    ExplorerTool {
        name: "get_token_transfers",
        description: "Get the latest token transfers across the whole chain.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/token-transfers"),
        label: "Token transfers",
        action: "getting token transfers",
    },
    ExplorerTool {
        name: "get_internal_transactions",
        description: "Get the latest internal transactions across the whole chain.",
        params: ParamShape::None,
        endpoint: Endpoint::new("/internal-transactions"),
        label: "Internal transactions",
        action: "getting internal transactions",
    },
];

#[cfg(test)]
mod tests {
    use super::super::find_tool;
    use crate::domains::tools::common::result_text;
    use crate::domains::tools::definitions::test_support::{handle_for, object};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_transactions_sends_only_supplied_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/transactions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [],
                "next_page_params": null
            })))
            .mount(&server)
            .await;

        let tool = find_tool("get_transactions").unwrap();
        let result = tool
            .execute(
                &handle_for(&server),
                object(serde_json::json!({
                    "filter_type": "validated",
                    "transaction_type": null
                })),
            )
            .await;
        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).unwrap().starts_with("Transactions:\n"));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.path(), "/api/v2/transactions");
        assert_eq!(requests[0].url.query(), Some("filter=validated"));
    }

    #[tokio::test]
    async fn test_get_transactions_all_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/transactions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
            .mount(&server)
            .await;

        let tool = find_tool("get_transactions").unwrap();
        tool.execute(
            &handle_for(&server),
            object(serde_json::json!({
                "filter_type": "pending",
                "transaction_type": "token_transfer",
                "method": "approve"
            })),
        )
        .await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            requests[0].url.query(),
            Some("filter=pending&type=token_transfer&method=approve")
        );
    }

    #[tokio::test]
    async fn test_get_transactions_without_filters_has_no_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/transactions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
            .mount(&server)
            .await;

        let tool = find_tool("get_transactions").unwrap();
        tool.execute(&handle_for(&server), object(serde_json::json!({})))
            .await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), None);
    }

    #[tokio::test]
    async fn test_transaction_token_transfers_type_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/transactions/0xfeed/token-transfers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
            .mount(&server)
            .await;

        let tool = find_tool("get_transaction_token_transfers").unwrap();
        let result = tool
            .execute(
                &handle_for(&server),
                object(serde_json::json!({
                    "transaction_hash": "0xfeed",
                    "token_type": "ERC-20"
                })),
            )
            .await;

        assert!(
            result_text(&result)
                .unwrap()
                .starts_with("Token transfers for transaction 0xfeed:\n")
        );
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("type=ERC-20"));
    }
}
