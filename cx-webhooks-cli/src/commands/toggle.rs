//! Enable or disable an existing webhook.

use cx_webhooks_client::WebhookClient;
use tracing::info;

use crate::error::CliResult;
use crate::output::{OutputFormat, print_webhook};

pub async fn run(
    client: &WebhookClient,
    id: &str,
    enable: bool,
    format: OutputFormat,
) -> CliResult<()> {
    let (webhook, action) = if enable {
        (client.enable_webhook(id).await?, "Enabled")
    } else {
        (client.disable_webhook(id).await?, "Disabled")
    };
    info!(id, enable, "Webhook state changed");

    print_webhook(action, &webhook, format)
}
