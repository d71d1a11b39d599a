//! Remove a webhook.

use colored::Colorize;
use cx_webhooks_client::WebhookClient;

use crate::error::CliResult;

pub async fn run(client: &WebhookClient, id: &str) -> CliResult<()> {
    client.delete_webhook(id).await?;

    println!("{} Deleted webhook {}", "✓".green(), id.cyan());
    Ok(())
}
