//! Rendering of command results.

use colored::Colorize;
use cx_webhooks_client::Webhook;

use crate::args::ParsedArgs;
use crate::error::CliResult;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_args(args: &ParsedArgs) -> Self {
        if args.is_set("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

const HEADERS: [&str; 4] = ["ID", "ENABLED", "URL", "EVENTS"];

fn row(webhook: &Webhook) -> [String; 4] {
    let enabled = match webhook.enabled() {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    };
    [
        webhook.id_display().unwrap_or_else(|| "-".to_string()),
        enabled.to_string(),
        webhook.url().unwrap_or("-").to_string(),
        webhook.event_types().join(", "),
    ]
}

/// Lay out webhooks as aligned text lines, header first.
pub fn format_table(webhooks: &[Webhook]) -> Vec<String> {
    let rows: Vec<[String; 4]> = webhooks.iter().map(row).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(line(HEADERS));
    for row in &rows {
        lines.push(line(row.each_ref().map(String::as_str)));
    }
    lines
}

/// Print a list of webhooks.
pub fn print_webhooks(webhooks: &[Webhook], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(webhooks)?),
        OutputFormat::Table if webhooks.is_empty() => println!("No webhooks found."),
        OutputFormat::Table => {
            let mut lines = format_table(webhooks).into_iter();
            if let Some(header) = lines.next() {
                println!("{}", header.bold());
            }
            for line in lines {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// Print a single webhook after a successful mutation.
pub fn print_webhook(action: &str, webhook: &Webhook, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(webhook)?),
        OutputFormat::Table => {
            let id = webhook.id_display().unwrap_or_else(|| "<unknown>".to_string());
            println!("{} {} webhook {}", "✓".green(), action, id.cyan());
            for line in format_table(std::slice::from_ref(webhook)) {
                println!("  {}", line);
            }
        }
    }
    Ok(())
}
