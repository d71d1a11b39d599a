//! Webhooks API client implementation.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

use crate::response::Response;
use crate::webhook::CreateWebhookBody;
use crate::{
    ClientCredentials, ClientError, CreateWebhookRequest, CxConfig, ListShape, Result,
    TokenSource, Webhook,
};

/// Client for one application's webhook collection.
///
/// Every public operation requests a fresh access token, issues exactly one
/// API call and returns either the normalized result or the first failure.
#[derive(Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    base_url: String,
    application_id: String,
    tokens: Arc<dyn TokenSource>,
}

impl WebhookClient {
    /// Create a client that authenticates with the configured client credentials.
    pub fn new(config: &CxConfig) -> Result<Self> {
        let http = build_http_client()?;
        let tokens = Arc::new(ClientCredentials::new(http.clone(), config.oauth.clone()));
        Ok(Self::with_parts(http, config, tokens))
    }

    /// Create a client with a custom token source.
    pub fn with_token_source(config: &CxConfig, tokens: Arc<dyn TokenSource>) -> Result<Self> {
        Ok(Self::with_parts(build_http_client()?, config, tokens))
    }

    fn with_parts(http: reqwest::Client, config: &CxConfig, tokens: Arc<dyn TokenSource>) -> Self {
        let base_url = config
            .base_url
            .strip_suffix('/')
            .unwrap_or(&config.base_url)
            .to_string();

        Self {
            http,
            base_url,
            application_id: config.application_id.clone(),
            tokens,
        }
    }

    /// Base URL with the trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the webhook collection.
    pub fn collection_url(&self) -> String {
        format!(
            "{}/applications/{}/webhooks",
            self.base_url, self.application_id
        )
    }

    /// URL of a single webhook, optionally followed by an action segment.
    ///
    /// The id is percent-encoded as one path segment.
    pub fn webhook_url(&self, id: &str, action: Option<&str>) -> Result<Url> {
        let mut url = Url::parse(&self.collection_url())?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ClientError::InvalidUrl(format!("{} cannot be a base URL", self.base_url))
            })?;
            segments.push(id);
            if let Some(action) = action {
                segments.push(action);
            }
        }
        Ok(url)
    }

    /// Headers carrying a freshly acquired bearer token.
    pub async fn authorized_headers(&self) -> Result<HeaderMap> {
        let token = self.tokens.access_token().await?;
        let mut value = HeaderValue::try_from(token.bearer()).map_err(|_| ClientError::Decode {
            operation: "authenticate",
            message: "access token is not a valid header value".to_string(),
        })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// List all webhooks of the application.
    pub async fn list_webhooks(&self) -> Result<Vec<Webhook>> {
        let operation = "list webhooks";
        let request = self.http.get(self.collection_url());
        let response = self.send(operation, request).await?;

        let body = response.json().map_err(|e| decode_error(operation, e))?;
        let webhooks = ListShape::inspect(body).into_webhooks();
        info!(count = webhooks.len(), "Listed webhooks");
        Ok(webhooks)
    }

    /// Create a webhook.
    pub async fn create_webhook(&self, request: &CreateWebhookRequest) -> Result<Webhook> {
        let operation = "create webhook";
        let builder = self
            .http
            .post(self.collection_url())
            .json(&CreateWebhookBody::new(request));
        let response = self.send(operation, builder).await?;

        let webhook = single_webhook(operation, &response)?;
        info!(id = ?webhook.id(), "Created webhook");
        Ok(webhook)
    }

    /// Enable a webhook.
    pub async fn enable_webhook(&self, id: &str) -> Result<Webhook> {
        self.toggle("enable webhook", id, "enable").await
    }

    /// Disable a webhook.
    pub async fn disable_webhook(&self, id: &str) -> Result<Webhook> {
        self.toggle("disable webhook", id, "disable").await
    }

    /// Delete a webhook. Any 2xx status counts as success.
    pub async fn delete_webhook(&self, id: &str) -> Result<()> {
        let operation = "delete webhook";
        let request = self.http.request(Method::DELETE, self.webhook_url(id, None)?);
        self.send(operation, request).await?;

        info!(id, "Deleted webhook");
        Ok(())
    }

    async fn toggle(&self, operation: &'static str, id: &str, action: &str) -> Result<Webhook> {
        let request = self.http.post(self.webhook_url(id, Some(action))?);
        let response = self.send(operation, request).await?;

        let webhook = single_webhook(operation, &response)?;
        info!(id, action, "Updated webhook");
        Ok(webhook)
    }

    /// Authenticate, send, and reject non-2xx responses.
    async fn send(&self, operation: &'static str, request: RequestBuilder) -> Result<Response> {
        let headers = self.authorized_headers().await?;
        let request = request.headers(headers).build()?;
        debug!(operation, method = %request.method(), url = %request.url(), "Sending request");

        let response = Response::from_reqwest(self.http.execute(request).await?).await;
        debug!(operation, status = %response.status(), "Received response");

        if !response.is_success() {
            return Err(ClientError::Request {
                operation,
                status: response.status().as_u16(),
                status_text: response.status_text(),
                body: response.into_body(),
            });
        }
        Ok(response)
    }
}

fn build_http_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("cx-webhooks/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

fn single_webhook(operation: &'static str, response: &Response) -> Result<Webhook> {
    match response.json().map_err(|e| decode_error(operation, e))? {
        Value::Object(map) => Ok(Webhook::normalize(map)),
        _ => Err(ClientError::Decode {
            operation,
            message: "expected a JSON object".to_string(),
        }),
    }
}

fn decode_error(operation: &'static str, error: serde_json::Error) -> ClientError {
    ClientError::Decode {
        operation,
        message: format!("invalid JSON: {}", error),
    }
}
