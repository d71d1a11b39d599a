//! OAuth2 client-credentials token acquisition.

use crate::response::Response;
use crate::{ClientError, Result};
use async_trait::async_trait;
use cx_webhooks_config::OAuthConfig;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// A bearer token valid for one logical operation.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Source of access tokens.
///
/// [`WebhookClient`](crate::WebhookClient) asks for a new token at the
/// start of every operation; implementations decide how it is obtained.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Obtain a token for the next request.
    async fn access_token(&self) -> Result<AccessToken>;
}

/// Token source for the OAuth2 client-credentials grant.
pub struct ClientCredentials {
    http: reqwest::Client,
    config: OAuthConfig,
}

impl ClientCredentials {
    pub fn new(http: reqwest::Client, config: OAuthConfig) -> Self {
        Self { http, config }
    }

    fn form(&self) -> Vec<(&'static str, &str)> {
        let mut form = vec![
            ("grant_type", "client_credentials"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
        ];
        if let Some(scope) = self.config.scopes.as_deref().filter(|s| !s.trim().is_empty()) {
            form.push(("scope", scope));
        }
        form
    }
}

#[async_trait]
impl TokenSource for ClientCredentials {
    async fn access_token(&self) -> Result<AccessToken> {
        debug!(endpoint = %self.config.auth_endpoint, client_id = %self.config.client_id, "Requesting access token");

        let response = self
            .http
            .post(&self.config.auth_endpoint)
            .form(&self.form())
            .send()
            .await?;
        let response = Response::from_reqwest(response).await;

        let failed = |response: Response| ClientError::Authentication {
            status: response.status().as_u16(),
            status_text: response.status_text(),
            body: response.into_body(),
        };

        if !response.is_success() {
            return Err(failed(response));
        }

        let token = response.json().ok().and_then(|body| match body.get("access_token") {
            Some(Value::String(token)) if !token.is_empty() => Some(token.clone()),
            _ => None,
        });

        match token {
            Some(token) => {
                debug!(status = %response.status(), "Access token acquired");
                Ok(AccessToken::new(token))
            }
            None => Err(failed(response)),
        }
    }
}
