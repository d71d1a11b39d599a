//! # Carerix Webhooks Client
//!
//! An authenticated client for managing the webhooks of one Carerix
//! application.
//!
//! ## Features
//!
//! - **Client Credentials**: A fresh OAuth2 token is requested for every operation
//! - **Webhook Operations**: List, create, enable, disable and delete
//! - **Normalization**: Heterogeneous server responses resolve to one `id`-bearing shape
//! - **Typed Failures**: Authentication and request failures carry status and body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cx_webhooks_client::{CreateWebhookRequest, CxConfig, WebhookClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CxConfig::load(None)?;
//!     let client = WebhookClient::new(&config)?;
//!
//!     for webhook in client.list_webhooks().await? {
//!         println!("{:?} -> {:?}", webhook.id(), webhook.url());
//!     }
//!
//!     let request = CreateWebhookRequest::new("https://hooks.example.com/cx")
//!         .with_event("vacancy:created")
//!         .with_header("x-api-key", "secret");
//!     let created = client.create_webhook(&request).await?;
//!     client.disable_webhook(&created.id_display().unwrap_or_default()).await?;
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod response;
mod shape;
mod webhook;

pub use auth::{AccessToken, ClientCredentials, TokenSource};
pub use client::WebhookClient;
pub use error::{ClientError, Result};
pub use shape::ListShape;
pub use webhook::{CreateWebhookRequest, ID_FIELDS, Webhook, WebhookFilter, WebhookHeader};

pub use cx_webhooks_config::{CxConfig, OAuthConfig};

/// Prelude for common imports.
///
/// ```
/// use cx_webhooks_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{AccessToken, TokenSource};
    pub use crate::client::WebhookClient;
    pub use crate::error::{ClientError, Result};
    pub use crate::webhook::{CreateWebhookRequest, Webhook, WebhookFilter, WebhookHeader};
    pub use cx_webhooks_config::CxConfig;
}
