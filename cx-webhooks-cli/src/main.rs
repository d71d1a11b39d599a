//! cx-webhooks - manage Carerix application webhooks from the command line.
//!
//! # Commands
//!
//! - `cx-webhooks list` - List registered webhooks
//! - `cx-webhooks create --url <url> --event <type>...` - Register a webhook
//! - `cx-webhooks enable <id>` - Enable a webhook
//! - `cx-webhooks disable <id>` - Disable a webhook
//! - `cx-webhooks delete <id>` - Delete a webhook

use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;
use cx_webhooks_client::WebhookClient;
use cx_webhooks_config::CxConfig;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod error;
mod output;

use args::{ParsedArgs, parse_args};
use commands::Command;
use error::{CliError, CliResult};
use output::OutputFormat;

const LOG_ENV: &str = "CX_LOG";

const USAGE: &str = "\
Usage: cx-webhooks [--env <path>] <command> [options]

Commands:
  list                          List registered webhooks
  create --url <url> --event <type> [--event <type>...] [--header key=value...]
                                Register a new webhook
  enable <id>                   Enable a webhook
  disable <id>                  Disable a webhook
  delete <id>                   Delete a webhook

Options:
  --env <path>                  Env file to load (default: .env)
  -e, --event <type>            Event type to subscribe to (repeatable)
  -H, --header <key=value>      Custom header sent with deliveries (repeatable)
  --json                        Print results as JSON
  -v, --verbose                 Enable debug logging
  -h, --help                    Show this help

Configuration (env file or environment):
  CX_AUTH_ENDPOINT, CX_CLIENT_ID, CX_CLIENT_SECRET, CX_APPLICATION_ID
  CX_SCOPES (optional), CX_BASE_URL (optional)";

fn print_usage() {
    println!("{}", USAGE);
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(colored::control::SHOULD_COLORIZE.should_colorize())
        .try_init();
}

async fn run(args: &ParsedArgs) -> CliResult<()> {
    let command = Command::from_args(args)?;
    let format = OutputFormat::from_args(args);

    let config = CxConfig::load(args.env_path.as_deref().map(Path::new))?;
    let client = WebhookClient::new(&config)?;

    commands::execute(command, &client, format).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = parse_args(std::env::args().skip(1));

    if args.command.is_none() {
        print_usage();
        return ExitCode::FAILURE;
    }

    init_logging(args.is_set("verbose") || args.is_set("v"));

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            if e.shows_usage() {
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_every_command() {
        for command in ["list", "create", "enable", "disable", "delete"] {
            assert!(USAGE.contains(command), "usage is missing {command}");
        }
    }

    #[tokio::test]
    async fn test_run_rejects_before_loading_config() {
        let args = parse_args(["--env", "/nonexistent/cx.env", "create", "--url", "u"]);
        let err = run(&args).await.unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[tokio::test]
    async fn test_run_reports_missing_env_file() {
        let args = parse_args(["--env", "/nonexistent/cx.env", "list"]);
        let err = run(&args).await.unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
