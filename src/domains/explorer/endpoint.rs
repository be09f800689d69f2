//! Endpoint descriptors for the explorer REST API.
//!
//! An [`Endpoint`] is a path template such as `/tokens/{address_hash}/holders`
//! plus the optional query parameters the upstream accepts. Templates are
//! filled from bound tool [`Arguments`]; placeholders become single path
//! segments and are percent-encoded by the client, never interpreted.

use std::collections::BTreeMap;

use serde_json::Value;

use super::error::ExplorerError;

/// Mapping of an upstream query parameter to the tool argument feeding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    /// Name on the wire (e.g. `type`).
    pub name: &'static str,

    /// Name of the tool argument (e.g. `transaction_type`).
    pub argument: &'static str,

    /// Required parameters are sent even when empty.
    pub required: bool,
}

impl QueryParam {
    /// Optional filter, omitted when unset or empty.
    pub const fn new(name: &'static str, argument: &'static str) -> Self {
        Self {
            name,
            argument,
            required: false,
        }
    }

    /// Parameter sent whenever its argument is bound, even as `name=`.
    pub const fn required(name: &'static str, argument: &'static str) -> Self {
        Self {
            name,
            argument,
            required: true,
        }
    }
}

/// A static upstream endpoint: path template and optional query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the API base, with `{argument}` placeholders.
    pub path: &'static str,

    /// Query parameters fed from tool arguments.
    pub query: &'static [QueryParam],
}

impl Endpoint {
    /// Endpoint without query parameters.
    pub const fn new(path: &'static str) -> Self {
        Self { path, query: &[] }
    }

    /// Endpoint with optional query parameters.
    pub const fn with_query(path: &'static str, query: &'static [QueryParam]) -> Self {
        Self { path, query }
    }

    /// Names of the path placeholders, in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
    }

    /// Resolve the path template into concrete segments.
    pub fn segments(&self, args: &Arguments) -> Result<Vec<String>, ExplorerError> {
        self.path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}'))
                else {
                    return Ok(segment.to_string());
                };
                let value = args.get(name).ok_or_else(|| {
                    ExplorerError::invalid_arguments(format!("missing path parameter '{}'", name))
                })?;
                if is_dot_segment(value) {
                    return Err(ExplorerError::invalid_arguments(format!(
                        "path parameter '{}' cannot be '{}'",
                        name, value
                    )));
                }
                Ok(value.to_string())
            })
            .collect()
    }

    /// Query pairs for the bound arguments.
    ///
    /// Absent arguments are skipped. Empty optional filters are skipped too,
    /// so an unset filter never reaches the query string.
    pub fn query_pairs(&self, args: &Arguments) -> Vec<(&'static str, String)> {
        self.query
            .iter()
            .filter_map(|param| {
                args.get(param.argument)
                    .filter(|value| param.required || !value.is_empty())
                    .map(|value| (param.name, value.to_string()))
            })
            .collect()
    }
}

/// `.` and `..` (literal or percent-encoded) are collapsed by URL
/// normalization and would address a different endpoint.
fn is_dot_segment(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e"
    )
}

/// Tool arguments bound to string values, keyed by argument name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments(BTreeMap<String, String>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build from a serialized parameter struct.
    ///
    /// Null members (unset optionals) are dropped. Only string members are
    /// accepted, since every explorer argument is an opaque identifier.
    pub fn from_value(value: Value) -> Result<Self, ExplorerError> {
        let Value::Object(map) = value else {
            return Err(ExplorerError::invalid_arguments(
                "arguments must be a JSON object",
            ));
        };

        let mut args = Self::new();
        for (name, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => args.insert(name, s),
                other => {
                    return Err(ExplorerError::invalid_arguments(format!(
                        "argument '{}' must be a string, got {}",
                        name, other
                    )));
                }
            }
        }
        Ok(args)
    }
}

/// Replace `{argument}` placeholders in `template` with bound values.
///
/// Unknown placeholders are left untouched.
pub fn interpolate(template: &str, args: &Arguments) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match args.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLDERS: Endpoint = Endpoint::new("/tokens/{address_hash}/instances/{instance_id}/holders");

    const TRANSACTIONS: Endpoint = Endpoint::with_query(
        "/transactions",
        &[
            QueryParam::new("filter", "filter_type"),
            QueryParam::new("type", "transaction_type"),
            QueryParam::new("method", "method"),
        ],
    );

    #[test]
    fn test_segments_substitute_placeholders() {
        let args = Arguments::new()
            .with("address_hash", "0xTOKEN")
            .with("instance_id", "7");
        let segments = HOLDERS.segments(&args).unwrap();
        assert_eq!(segments, vec!["tokens", "0xTOKEN", "instances", "7", "holders"]);
    }

    #[test]
    fn test_segments_missing_placeholder() {
        let args = Arguments::new().with("address_hash", "0xTOKEN");
        let err = HOLDERS.segments(&args).unwrap_err();
        assert!(err.to_string().contains("instance_id"));
    }

    #[test]
    fn test_segments_reject_dot_values() {
        for value in [".", "..", "%2e", "%2E", ".%2e", "%2E.", "%2e%2E"] {
            let args = Arguments::new()
                .with("address_hash", "0xTOKEN")
                .with("instance_id", value);
            let err = HOLDERS.segments(&args).unwrap_err();
            assert!(
                matches!(err, ExplorerError::InvalidArguments(_)),
                "{value} was accepted"
            );
            assert!(err.to_string().contains("instance_id"));
        }
    }

    #[test]
    fn test_segments_keep_dotted_identifiers() {
        let args = Arguments::new()
            .with("address_hash", "...")
            .with("instance_id", "1.5");
        let segments = HOLDERS.segments(&args).unwrap();
        assert_eq!(segments[1], "...");
        assert_eq!(segments[3], "1.5");
    }

    #[test]
    fn test_required_query_sent_when_empty() {
        const SEARCH: Endpoint =
            Endpoint::with_query("/search", &[QueryParam::required("q", "query")]);

        let pairs = SEARCH.query_pairs(&Arguments::new().with("query", ""));
        assert_eq!(pairs, vec![("q", String::new())]);
        assert!(SEARCH.query_pairs(&Arguments::new()).is_empty());
    }

    #[test]
    fn test_placeholders() {
        let names: Vec<_> = HOLDERS.placeholders().collect();
        assert_eq!(names, vec!["address_hash", "instance_id"]);
        assert_eq!(TRANSACTIONS.placeholders().count(), 0);
    }

    #[test]
    fn test_query_pairs_skip_absent_and_empty() {
        let args = Arguments::new()
            .with("filter_type", "validated")
            .with("method", "");
        let pairs = TRANSACTIONS.query_pairs(&args);
        assert_eq!(pairs, vec![("filter", "validated".to_string())]);
    }

    #[test]
    fn test_query_pairs_use_wire_names() {
        let args = Arguments::new()
            .with("transaction_type", "token_transfer")
            .with("method", "approve");
        let pairs = TRANSACTIONS.query_pairs(&args);
        assert_eq!(
            pairs,
            vec![
                ("type", "token_transfer".to_string()),
                ("method", "approve".to_string())
            ]
        );
    }

    #[test]
    fn test_from_value_drops_nulls() {
        let args = Arguments::from_value(serde_json::json!({
            "address_hash": "0xabc",
            "token_type": null
        }))
        .unwrap();
        assert_eq!(args.get("address_hash"), Some("0xabc"));
        assert_eq!(args.get("token_type"), None);
    }

    #[test]
    fn test_from_value_rejects_non_strings() {
        assert!(Arguments::from_value(serde_json::json!({ "instance_id": 7 })).is_err());
        assert!(Arguments::from_value(serde_json::json!(["0xabc"])).is_err());
    }

    #[test]
    fn test_interpolate() {
        let args = Arguments::new()
            .with("address_hash", "0xTOKEN")
            .with("instance_id", "7");
        assert_eq!(
            interpolate("Holders for token instance {address_hash}/{instance_id}", &args),
            "Holders for token instance 0xTOKEN/7"
        );
        assert_eq!(interpolate("Search results for '{query}'", &args), "Search results for '{query}'");
        assert_eq!(interpolate("Unclosed {brace", &args), "Unclosed {brace");
    }
}
