//! Block tools.

use super::explorer_tool::ExplorerTool;
use super::params::ParamShape;
use crate::domains::explorer::{Endpoint, QueryParam};

pub const TOOLS: &[ExplorerTool] = &[
    ExplorerTool {
        name: "get_blocks",
        description: "Get blocks with optional type filtering (block, uncle, reorg).",
        params: ParamShape::BlockFilter,
        endpoint: Endpoint::with_query("/blocks", &[QueryParam::new("type", "block_type")]),
        label: "Blocks",
        action: "getting blocks",
    },
    ExplorerTool {
        name: "get_block_details",
        description: "Get specific block details by number or hash.",
        params: ParamShape::Block,
        endpoint: Endpoint::new("/blocks/{block_number_or_hash}"),
        label: "Block details for {block_number_or_hash}",
        action: "getting block details",
    },
    ExplorerTool {
        name: "get_block_transactions",
        description: "Get transactions included in a specific block.",
        params: ParamShape::Block,
        endpoint: Endpoint::new("/blocks/{block_number_or_hash}/transactions"),
        label: "Transactions for block {block_number_or_hash}",
        action: "getting block transactions",
    },
    ExplorerTool {
        name: "get_block_withdrawals",
        description: "Get withdrawals included in a specific block.",
        params: ParamShape::Block,
        endpoint: Endpoint::new("/blocks/{block_number_or_hash}/withdrawals"),
        label: "Withdrawals for block {block_number_or_hash}",
        action: "getting block withdrawals",
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
    async fn test_block_details_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/blocks/999999999"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string("{\"message\":\"Not found\"}"),
            )
            .mount(&server)
            .await;

        let tool = find_tool("get_block_details").unwrap();
        let result = tool
            .execute(
                &handle_for(&server),
                object(serde_json::json!({ "block_number_or_hash": "999999999" })),
            )
            .await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result_text(&result).unwrap(),
            "Error getting block details: explorer returned 404 Not Found: {\"message\":\"Not found\"}"
        );
    }

    #[tokio::test]
    async fn test_blocks_type_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/blocks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
            .mount(&server)
            .await;

        let tool = find_tool("get_blocks").unwrap();
        let result = tool
            .execute(
                &handle_for(&server),
                object(serde_json::json!({ "block_type": "uncle" })),
            )
            .await;

        assert_eq!(result.is_error, Some(false));
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("type=uncle"));
    }
}
