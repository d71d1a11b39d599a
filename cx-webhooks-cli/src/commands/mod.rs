//! Command implementations.

pub mod create;
pub mod delete;
pub mod list;
pub mod toggle;

use cx_webhooks_client::{CreateWebhookRequest, WebhookClient};

use crate::args::{FlagValue, ParsedArgs, parse_headers};
use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// A validated command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Create(CreateWebhookRequest),
    Enable(String),
    Disable(String),
    Delete(String),
}

impl Command {
    /// Validate parsed arguments. No I/O happens here.
    pub fn from_args(args: &ParsedArgs) -> CliResult<Self> {
        let name = args.command.as_deref().ok_or(CliError::Usage)?;

        match name {
            "list" => Ok(Command::List),
            "create" => create_request(args).map(Command::Create),
            "enable" => webhook_id(args, name).map(Command::Enable),
            "disable" => webhook_id(args, name).map(Command::Disable),
            "delete" => webhook_id(args, name).map(Command::Delete),
            other => Err(CliError::UnknownCommand(other.to_string())),
        }
    }
}

fn create_request(args: &ParsedArgs) -> CliResult<CreateWebhookRequest> {
    let url = args
        .flag("url")
        .and_then(FlagValue::as_str)
        .ok_or_else(|| CliError::Validation("create requires --url <url>".to_string()))?;

    let events = args
        .flag("event")
        .and_then(FlagValue::as_list)
        .filter(|events| !events.is_empty())
        .ok_or_else(|| {
            CliError::Validation("create requires at least one --event <type>".to_string())
        })?;

    let mut request = CreateWebhookRequest::new(url);
    for event in events {
        request = request.with_event(event.as_str());
    }
    request.custom_headers = parse_headers(args.flag("header"))?;

    Ok(request)
}

fn webhook_id(args: &ParsedArgs, command: &str) -> CliResult<String> {
    args.positional
        .first()
        .cloned()
        .ok_or_else(|| CliError::Validation(format!("{} requires a webhook <id>", command)))
}

/// Run a command against the API and print its result.
pub async fn execute(
    command: Command,
    client: &WebhookClient,
    format: OutputFormat,
) -> CliResult<()> {
    match command {
        Command::List => list::run(client, format).await,
        Command::Create(request) => create::run(client, &request, format).await,
        Command::Enable(id) => toggle::run(client, &id, true, format).await,
        Command::Disable(id) => toggle::run(client, &id, false, format).await,
        Command::Delete(id) => delete::run(client, &id).await,
    }
}
