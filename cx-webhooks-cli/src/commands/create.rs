//! Register a new webhook.

use cx_webhooks_client::{CreateWebhookRequest, WebhookClient};
use tracing::info;

use crate::error::CliResult;
use crate::output::{OutputFormat, print_webhook};

pub async fn run(
    client: &WebhookClient,
    request: &CreateWebhookRequest,
    format: OutputFormat,
) -> CliResult<()> {
    info!(url = %request.url, "Creating webhook");

    let webhook = client.create_webhook(request).await?;
    print_webhook("Created", &webhook, format)
}
