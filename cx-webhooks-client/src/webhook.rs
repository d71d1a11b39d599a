//! Webhook request and response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields that may carry a webhook's identifier, highest priority first.
pub const ID_FIELDS: [&str; 4] = ["id", "_id", "webhookId", "uuid"];

/// One event-type subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookFilter {
    pub event_type: String,
}

impl WebhookFilter {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
        }
    }
}

/// A custom header attached to deliveries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookHeader {
    pub name: String,
    pub value: String,
}

impl WebhookHeader {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Payload for creating a webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<WebhookFilter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_headers: Option<Vec<WebhookHeader>>,
}

impl CreateWebhookRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            filters: None,
            custom_headers: None,
        }
    }

    /// Subscribe to an event type.
    pub fn with_event(mut self, event_type: impl Into<String>) -> Self {
        self.filters
            .get_or_insert_with(Vec::new)
            .push(WebhookFilter::new(event_type));
        self
    }

    /// Attach a custom delivery header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers
            .get_or_insert_with(Vec::new)
            .push(WebhookHeader::new(name, value));
        self
    }
}

/// Wire body for `POST /webhooks`: the request tagged with its kind.
#[derive(Serialize)]
pub(crate) struct CreateWebhookBody<'a> {
    #[serde(rename = "_kind")]
    kind: &'static str,
    #[serde(flatten)]
    request: &'a CreateWebhookRequest,
}

impl<'a> CreateWebhookBody<'a> {
    pub(crate) fn new(request: &'a CreateWebhookRequest) -> Self {
        Self {
            kind: "Webhook",
            request,
        }
    }
}

/// A webhook as returned by the server.
///
/// Every server field is kept verbatim and in order; [`Webhook::normalize`]
/// only guarantees that a resolved `id` comes first when one exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Webhook(Map<String, Value>);

impl Webhook {
    /// Resolve the identifier of a raw server object.
    ///
    /// The first non-null field of [`ID_FIELDS`] is placed under `id` as the
    /// first key, then every original field is laid over it unchanged. A
    /// server-sent `id` therefore always keeps its own value. Without any
    /// identifier no `id` key is added.
    pub fn normalize(raw: Map<String, Value>) -> Self {
        let id = ID_FIELDS
            .iter()
            .find_map(|field| raw.get(*field).filter(|v| !v.is_null()))
            .cloned();

        let mut fields = Map::with_capacity(raw.len() + 1);
        if let Some(id) = id {
            fields.insert("id".to_string(), id);
        }
        // An existing key keeps its position on insert.
        fields.extend(raw);

        Self(fields)
    }

    /// Resolved identifier, `None` when absent or null.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id").filter(|id| !id.is_null())
    }

    /// Identifier rendered as text. Strings are returned without quotes.
    pub fn id_display(&self) -> Option<String> {
        self.id().map(|id| match id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    pub fn enabled(&self) -> Option<bool> {
        self.0.get("enabled").and_then(Value::as_bool)
    }

    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(Value::as_str)
    }

    /// Event types from the `filters` array, in order.
    pub fn event_types(&self) -> Vec<&str> {
        self.0
            .get("filters")
            .and_then(Value::as_array)
            .map(|filters| {
                filters
                    .iter()
                    .filter_map(|f| f.get("eventType").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn keys(webhook: &Webhook) -> Vec<&str> {
        webhook.as_map().keys().map(String::as_str).collect()
    }

    #[test]
    fn test_id_priority() {
        let cases = [
            (json!({"id": "a", "_id": "b", "webhookId": "c", "uuid": "d"}), "a"),
            (json!({"_id": "b", "webhookId": "c", "uuid": "d"}), "b"),
            (json!({"uuid": "d", "webhookId": "c"}), "c"),
            (json!({"uuid": "d"}), "d"),
        ];

        for (raw, expected) in cases {
            let webhook = Webhook::normalize(object(raw));
            assert_eq!(webhook.id(), Some(&json!(expected)));
        }
    }

    #[test]
    fn test_original_fields_preserved_in_order() {
        let raw = object(json!({
            "url": "https://hooks.example.com/a",
            "uuid": "u-1",
            "enabled": true,
            "x-vendor": {"tier": 2}
        }));
        let webhook = Webhook::normalize(raw.clone());

        assert_eq!(keys(&webhook), vec!["id", "url", "uuid", "enabled", "x-vendor"]);
        for (key, value) in &raw {
            assert_eq!(webhook.get(key), Some(value));
        }
    }

    #[test]
    fn test_existing_id_keeps_position_first() {
        let webhook = Webhook::normalize(object(json!({"url": "u", "id": 7})));

        assert_eq!(keys(&webhook), vec!["id", "url"]);
        assert_eq!(webhook.id_display().as_deref(), Some("7"));
    }

    #[test]
    fn test_server_null_id_is_preserved() {
        let raw = object(json!({"id": null, "_id": "b", "url": "u"}));
        let webhook = Webhook::normalize(raw.clone());

        assert_eq!(keys(&webhook), vec!["id", "_id", "url"]);
        for (key, value) in &raw {
            assert_eq!(webhook.get(key), Some(value), "field {key} changed");
        }
        assert_eq!(webhook.id(), None);
        assert_eq!(webhook.id_display(), None);
    }

    #[test]
    fn test_server_id_wins_over_resolution() {
        let webhook = Webhook::normalize(object(json!({"_id": "b", "url": "u", "id": 0})));

        assert_eq!(keys(&webhook), vec!["id", "_id", "url"]);
        assert_eq!(webhook.id(), Some(&json!(0)));
    }

    #[test]
    fn test_no_id_fields() {
        let raw = object(json!({"url": "https://hooks.example.com", "enabled": false}));
        let webhook = Webhook::normalize(raw.clone());

        assert_eq!(webhook.id(), None);
        assert_eq!(webhook.into_map(), raw);
    }

    #[test]
    fn test_accessors() {
        let webhook = Webhook::normalize(object(json!({
            "_id": "wh-1",
            "enabled": true,
            "url": "https://hooks.example.com",
            "filters": [{"eventType": "a:created"}, {"eventType": "b:updated"}, {}]
        })));

        assert_eq!(webhook.id_display().as_deref(), Some("wh-1"));
        assert_eq!(webhook.enabled(), Some(true));
        assert_eq!(webhook.url(), Some("https://hooks.example.com"));
        assert_eq!(webhook.event_types(), vec!["a:created", "b:updated"]);
    }

    #[test]
    fn test_create_body_serialization() {
        let request = CreateWebhookRequest::new("https://hooks.example.com")
            .with_event("vacancy:created")
            .with_header("x-api-key", "secret");
        let body = serde_json::to_value(CreateWebhookBody::new(&request)).unwrap();

        assert_eq!(
            body,
            json!({
                "_kind": "Webhook",
                "url": "https://hooks.example.com",
                "filters": [{"eventType": "vacancy:created"}],
                "customHeaders": [{"name": "x-api-key", "value": "secret"}]
            })
        );
    }

    #[test]
    fn test_create_body_omits_absent_lists() {
        let request = CreateWebhookRequest::new("https://hooks.example.com");
        let body = serde_json::to_value(CreateWebhookBody::new(&request)).unwrap();

        assert_eq!(body, json!({"_kind": "Webhook", "url": "https://hooks.example.com"}));
    }
}
