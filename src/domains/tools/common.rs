//! Result helpers shared by the explorer tools.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;
use tracing::warn;

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Render an upstream response under its label.
///
/// The body is pretty-printed JSON, so it parses back to exactly the value
/// the explorer returned.
pub fn format_response(label: &str, value: &Value) -> String {
    let body = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    format!("{}:\n{}", label, body)
}

/// First text block of a tool result.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    use rmcp::model::RawContent;

    result
        .content
        .first()
        .and_then(|content| match &content.raw {
            RawContent::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
}
