//! Path-tracking access into loosely structured JSON.
//!
//! Every [`Node`] remembers the dotted path it was reached by, so a missing
//! or mistyped field is reported as
//! [`ProjectionError::MalformedResponse`] naming exactly that field.

use serde_json::Value;

use crate::projection::ProjectionError;

/// A JSON value and the path it was reached by.
#[derive(Clone, Debug)]
pub(crate) struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    pub(crate) fn new(value: &'a Value, path: impl Into<String>) -> Self {
        Self {
            value,
            path: path.into(),
        }
    }

    fn join(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn malformed(&self) -> ProjectionError {
        ProjectionError::malformed(self.path.clone())
    }

    /// Returns the member `key`, treating `null` as absent.
    pub(crate) fn get(&self, key: &str) -> Option<Self> {
        self.value
            .get(key)
            .filter(|value| !value.is_null())
            .map(|value| Self::new(value, self.join(key)))
    }

    /// Returns the member `key`, failing if it is absent or `null`.
    pub(crate) fn require(&self, key: &str) -> Result<Self, ProjectionError> {
        self.get(key)
            .ok_or_else(|| ProjectionError::malformed(self.join(key)))
    }

    pub(crate) fn is_object(&self) -> bool {
        self.value.is_object()
    }

    pub(crate) fn as_str(&self) -> Result<&'a str, ProjectionError> {
        self.value.as_str().ok_or_else(|| self.malformed())
    }

    pub(crate) fn as_f64(&self) -> Result<f64, ProjectionError> {
        self.value.as_f64().ok_or_else(|| self.malformed())
    }

    pub(crate) fn as_u64(&self) -> Result<u64, ProjectionError> {
        self.value.as_u64().ok_or_else(|| self.malformed())
    }

    pub(crate) fn as_bool(&self) -> Result<bool, ProjectionError> {
        self.value.as_bool().ok_or_else(|| self.malformed())
    }

    /// Reads an identifier that the API may send as a string or a number.
    pub(crate) fn as_id(&self) -> Result<String, ProjectionError> {
        match self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(self.malformed()),
        }
    }

    /// Renders any scalar or structure as text; strings are returned unquoted.
    pub(crate) fn to_text(&self) -> String {
        match self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Returns the elements of an array, each with an indexed path.
    pub(crate) fn items(&self) -> Result<Vec<Self>, ProjectionError> {
        let items = self.value.as_array().ok_or_else(|| self.malformed())?;
        Ok(items
            .iter()
            .enumerate()
            .map(|(index, value)| Self::new(value, format!("{}[{index}]", self.path)))
            .collect())
    }

    pub(crate) fn require_str(&self, key: &str) -> Result<&'a str, ProjectionError> {
        self.require(key)?.as_str()
    }

    pub(crate) fn optional_str(&self, key: &str) -> Result<Option<&'a str>, ProjectionError> {
        self.get(key).map(|node| node.as_str()).transpose()
    }

    pub(crate) fn optional_bool(&self, key: &str) -> Result<Option<bool>, ProjectionError> {
        self.get(key).map(|node| node.as_bool()).transpose()
    }

    pub(crate) fn optional_u64(&self, key: &str) -> Result<Option<u64>, ProjectionError> {
        self.get(key).map(|node| node.as_u64()).transpose()
    }

    /// Returns the elements of an optional array; absent or `null` is empty.
    pub(crate) fn optional_items(&self, key: &str) -> Result<Vec<Self>, ProjectionError> {
        self.get(key).map_or_else(|| Ok(Vec::new()), |node| node.items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_require_reports_full_path() {
        let value = json!({"store": {"name": null}});
        let root = Node::new(&value, "data");

        let error = root.require("store").unwrap().require("name").unwrap_err();
        assert_eq!(error, ProjectionError::malformed("data.store.name"));
    }

    #[test]
    fn test_items_index_paths() {
        let value = json!({"stores": [{"a": 1}, {"b": 2}]});
        let root = Node::new(&value, "data");

        let items = root.require("stores").unwrap().items().unwrap();
        let error = items[1].require("a").unwrap_err();
        assert_eq!(error, ProjectionError::malformed("data.stores[1].a"));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let value = json!({"total": "many"});
        let root = Node::new(&value, "page");

        let error = root.require("total").unwrap().as_u64().unwrap_err();
        assert_eq!(error, ProjectionError::malformed("page.total"));
    }

    #[test]
    fn test_optional_accessors_tolerate_absence_and_null() {
        let value = json!({"a": null});
        let root = Node::new(&value, "");

        assert_eq!(root.optional_str("a").unwrap(), None);
        assert_eq!(root.optional_bool("b").unwrap(), None);
        assert!(root.optional_items("a").unwrap().is_empty());
    }

    #[test]
    fn test_optional_accessors_reject_wrong_type() {
        let value = json!({"flag": "yes"});
        let root = Node::new(&value, "p");
        assert_eq!(
            root.optional_bool("flag").unwrap_err(),
            ProjectionError::malformed("p.flag")
        );
    }

    #[test]
    fn test_as_id_accepts_strings_and_numbers() {
        let value = json!({"n": 590, "s": "590", "b": true});
        let root = Node::new(&value, "");

        assert_eq!(root.require("n").unwrap().as_id().unwrap(), "590");
        assert_eq!(root.require("s").unwrap().as_id().unwrap(), "590");
        assert!(root.require("b").unwrap().as_id().is_err());
    }

    #[test]
    fn test_to_text_unquotes_strings() {
        let value = json!({"s": "9:00 AM", "o": {"start": 1}});
        let root = Node::new(&value, "");

        assert_eq!(root.require("s").unwrap().to_text(), "9:00 AM");
        assert_eq!(root.require("o").unwrap().to_text(), r#"{"start":1}"#);
    }
}
