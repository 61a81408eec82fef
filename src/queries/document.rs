//! The [`GraphqlDocument`] type sent to the endpoint.

use serde::Serialize;
use serde_json::{Map, Value};

/// A compact GraphQL query plus the variables it references.
///
/// The query text is single-line with every whitespace run collapsed to one
/// space. User-supplied strings never appear in the text; they travel in
/// [`variables`](Self::variables).
///
/// Serializes to the request body shape `{"query": ..., "variables": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphqlDocument {
    #[serde(skip)]
    operation_name: &'static str,
    query: String,
    variables: Map<String, Value>,
}

impl GraphqlDocument {
    /// Creates a document from a query template, compacting its whitespace.
    #[must_use]
    pub fn new(
        operation_name: &'static str,
        query: &str,
        variables: Map<String, Value>,
    ) -> Self {
        Self {
            operation_name,
            query: compact(query),
            variables,
        }
    }

    /// Returns the operation name, used for logging.
    #[must_use]
    pub const fn operation_name(&self) -> &'static str {
        self.operation_name
    }

    /// Returns the compact query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the variables object.
    #[must_use]
    pub const fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }

    /// Returns the JSON request body.
    #[must_use]
    pub fn to_body(&self) -> Value {
        serde_json::json!({
            "query": self.query,
            "variables": self.variables,
        })
    }
}

/// Collapses every run of whitespace to a single space and trims the ends.
///
/// Tokens are never merged: a run is replaced, not removed.
#[must_use]
pub fn compact(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact_collapses_whitespace_runs() {
        let compacted = compact("\n  query {\n\t  shop   {\r\n name }\n}\n ");
        assert_eq!(compacted, "query { shop { name } }");
    }

    #[test]
    fn test_compact_keeps_tokens_separate() {
        assert_eq!(compact("a\nb\tc"), "a b c");
    }

    #[test]
    fn test_body_contains_query_and_variables() {
        let mut variables = Map::new();
        variables.insert("address".to_string(), json!("Pharr, TX"));
        let document = GraphqlDocument::new("Test", "query Test($address: String!) { x }", variables);

        assert_eq!(
            document.to_body(),
            json!({
                "query": "query Test($address: String!) { x }",
                "variables": { "address": "Pharr, TX" }
            })
        );
    }

    #[test]
    fn test_body_has_empty_variables_object_when_none() {
        let document = GraphqlDocument::new("Test", "query { x }", Map::new());
        assert_eq!(document.to_body()["variables"], json!({}));
    }

    #[test]
    fn test_serialize_matches_body() {
        let document = GraphqlDocument::new("Test", "query { x }", Map::new());
        assert_eq!(serde_json::to_value(&document).unwrap(), document.to_body());
    }
}
