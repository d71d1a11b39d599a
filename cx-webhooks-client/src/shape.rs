//! Response shapes accepted by the list endpoint.

use crate::Webhook;
use serde_json::{Map, Value};
use tracing::warn;

/// The shape of a list response, resolved by inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum ListShape {
    /// A bare JSON array.
    Array(Vec<Value>),
    /// An object wrapping an `items` array.
    Items(Vec<Value>),
    /// A single webhook object.
    Single(Map<String, Value>),
    /// `null` or any other non-collection value.
    Empty,
}

impl ListShape {
    /// Classify a decoded response body.
    pub fn inspect(body: Value) -> Self {
        match body {
            Value::Array(items) => Self::Array(items),
            Value::Object(mut map) => {
                if matches!(map.get("items"), Some(Value::Array(_)))
                    && let Some(Value::Array(items)) = map.remove("items")
                {
                    return Self::Items(items);
                }
                Self::Single(map)
            }
            _ => Self::Empty,
        }
    }

    /// Normalize every webhook object in the response.
    ///
    /// Array elements that are not objects are skipped.
    pub fn into_webhooks(self) -> Vec<Webhook> {
        match self {
            Self::Array(items) | Self::Items(items) => items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| match item {
                    Value::Object(map) => Some(Webhook::normalize(map)),
                    other => {
                        warn!(index, kind = json_kind(&other), "Skipping non-object list element");
                        None
                    }
                })
                .collect(),
            Self::Single(map) => vec![Webhook::normalize(map)],
            Self::Empty => Vec::new(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(webhooks: &[Webhook]) -> Vec<String> {
        webhooks.iter().filter_map(Webhook::id_display).collect()
    }

    #[test]
    fn test_bare_array() {
        let shape = ListShape::inspect(json!([{"id": "a"}, {"_id": "b"}, {"uuid": "c"}]));
        assert!(matches!(shape, ListShape::Array(ref items) if items.len() == 3));
        assert_eq!(ids(&shape.into_webhooks()), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_items_wrapper() {
        let shape = ListShape::inspect(json!({"items": [{"webhookId": "x"}, {"id": "y"}], "total": 2}));
        assert!(matches!(shape, ListShape::Items(_)));
        assert_eq!(ids(&shape.into_webhooks()), vec!["x", "y"]);
    }

    #[test]
    fn test_single_object() {
        let shape = ListShape::inspect(json!({"id": "only", "enabled": true}));
        let webhooks = shape.into_webhooks();
        assert_eq!(webhooks.len(), 1);
        assert_eq!(webhooks[0].enabled(), Some(true));
    }

    #[test]
    fn test_non_array_items_is_single_object() {
        let shape = ListShape::inspect(json!({"id": "w", "items": "not-a-list"}));
        match shape {
            ListShape::Single(map) => assert_eq!(map.get("items"), Some(&json!("not-a-list"))),
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn test_empty_shapes() {
        for body in [json!(null), json!("text"), json!(42), json!(true)] {
            let shape = ListShape::inspect(body);
            assert_eq!(shape, ListShape::Empty);
            assert!(shape.into_webhooks().is_empty());
        }
    }

    #[test]
    fn test_empty_array() {
        assert!(ListShape::inspect(json!([])).into_webhooks().is_empty());
    }

    #[test]
    fn test_non_object_elements_skipped() {
        let webhooks = ListShape::inspect(json!([{"id": "a"}, "junk", null, {"id": "b"}])).into_webhooks();
        assert_eq!(ids(&webhooks), vec!["a", "b"]);
    }
}
