//! List webhooks registered for the application.

use cx_webhooks_client::WebhookClient;
use tracing::debug;

use crate::error::CliResult;
use crate::output::{OutputFormat, print_webhooks};

pub async fn run(client: &WebhookClient, format: OutputFormat) -> CliResult<()> {
    let webhooks = client.list_webhooks().await?;
    debug!(count = webhooks.len(), "Fetched webhooks");

    print_webhooks(&webhooks, format)
}
