//! The token tree

use serde::Deserialize;
use serde_json::Value;

/// One node of a token document.
///
/// A node is either a group (ordered mapping of keys to child nodes) or a
/// leaf. Values that carry no token (`null`, booleans, arrays) become
/// [`TokenNode::Empty`] and are skipped by the flattener.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum TokenNode {
    /// Nested mapping, in document order
    Group(Vec<(String, TokenNode)>),
    /// String leaf, classified during flattening
    Text(String),
    /// Bare numeric leaf
    Number(f64),
    /// Anything without a token value
    Empty,
}

impl TokenNode {
    /// Build a group from `(key, node)` pairs.
    pub fn group<K: Into<String>>(entries: impl IntoIterator<Item = (K, TokenNode)>) -> Self {
        TokenNode::Group(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Look up a direct child by key.
    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        match self {
            TokenNode::Group(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Whether this node is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, TokenNode::Group(_))
    }

    /// Keys of a group in document order; empty for leaves.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            TokenNode::Group(entries) => entries.iter().map(|(k, _)| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Value> for TokenNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                TokenNode::Group(map.into_iter().map(|(k, v)| (k, TokenNode::from(v))).collect())
            }
            Value::String(s) => TokenNode::Text(s),
            Value::Number(n) => n.as_f64().map(TokenNode::Number).unwrap_or(TokenNode::Empty),
            Value::Null | Value::Bool(_) | Value::Array(_) => TokenNode::Empty,
        }
    }
}

impl From<&str> for TokenNode {
    fn from(value: &str) -> Self {
        TokenNode::Text(value.to_string())
    }
}

impl From<f64> for TokenNode {
    fn from(value: f64) -> Self {
        TokenNode::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_document_order() {
        let node = TokenNode::from(json!({ "zeta": "1", "alpha": "2", "mid": "3" }));
        assert_eq!(node.keys(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_json_leaf_kinds() {
        assert_eq!(TokenNode::from(json!("#fff")), TokenNode::Text("#fff".into()));
        assert_eq!(TokenNode::from(json!(4)), TokenNode::Number(4.0));
        assert_eq!(TokenNode::from(json!(null)), TokenNode::Empty);
        assert_eq!(TokenNode::from(json!(true)), TokenNode::Empty);
        assert_eq!(TokenNode::from(json!(["a"])), TokenNode::Empty);
    }

    #[test]
    fn test_get_child() {
        let node = TokenNode::from(json!({ "colors": { "brand": "#000" } }));
        let colors = node.get("colors").unwrap();
        assert!(colors.is_group());
        assert_eq!(colors.get("brand"), Some(&TokenNode::Text("#000".into())));
        assert!(node.get("missing").is_none());
    }

    #[test]
    fn test_deserialize_via_serde() {
        let node: TokenNode = serde_json::from_str(r#"{"a": {"b": 2}}"#).unwrap();
        assert_eq!(
            node,
            TokenNode::group([("a", TokenNode::group([("b", TokenNode::Number(2.0))]))])
        );
    }
}
