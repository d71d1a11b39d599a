//! Command-line argument parsing.
//!
//! Tokens are scanned left to right in three phases: leading `--env <path>`
//! pairs, the command name, then options and positional parameters.
//! `--event`/`-e` and `--header`/`-H` may repeat; any other dash-prefixed
//! token becomes a boolean flag.

use std::collections::BTreeMap;

use cx_webhooks_client::WebhookHeader;

use crate::error::{CliError, CliResult};

/// Value stored for a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl FlagValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FlagValue::List(values) => Some(values),
            _ => None,
        }
    }
}

/// Result of parsing the raw argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    /// `--env <path>` given before the command.
    pub env_path: Option<String>,
    /// Command name; `None` means usage should be shown.
    pub command: Option<String>,
    pub positional: Vec<String>,
    pub flags: BTreeMap<String, FlagValue>,
}

impl ParsedArgs {
    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    /// True when `name` was given as a boolean flag.
    pub fn is_set(&self, name: &str) -> bool {
        matches!(self.flags.get(name), Some(FlagValue::Bool(true)))
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
    let mut parsed = ParsedArgs::default();

    if tokens.is_empty() || tokens.iter().any(|t| t == "--help" || t == "-h") {
        return parsed;
    }

    let mut i = 0;
    while i + 1 < tokens.len() && tokens[i] == "--env" {
        parsed.env_path = Some(tokens[i + 1].clone());
        i += 2;
    }

    let Some(command) = tokens.get(i) else {
        return parsed;
    };
    parsed.command = Some(command.clone());
    i += 1;

    while i < tokens.len() {
        let token = tokens[i].as_str();
        let value = tokens.get(i + 1).cloned();

        match token {
            "--env" | "--url" | "--event" | "-e" | "--header" | "-H" => {
                let name = canonical_name(token);
                match value {
                    Some(value) => {
                        store_value(&mut parsed.flags, name, value);
                        i += 2;
                    }
                    None => {
                        if name != "env" {
                            parsed
                                .flags
                                .entry(name.to_string())
                                .or_insert(FlagValue::Bool(true));
                        }
                        i += 1;
                    }
                }
            }
            _ if token.starts_with('-') => {
                parsed
                    .flags
                    .insert(token.trim_start_matches('-').to_string(), FlagValue::Bool(true));
                i += 1;
            }
            _ => {
                parsed.positional.push(token.to_string());
                i += 1;
            }
        }
    }

    parsed
}

fn canonical_name(token: &str) -> &'static str {
    match token {
        "--env" => "env",
        "--url" => "url",
        "--event" | "-e" => "event",
        _ => "header",
    }
}

fn store_value(flags: &mut BTreeMap<String, FlagValue>, name: &str, value: String) {
    match name {
        // The env path is fixed before the command name.
        "env" => {}
        "url" => {
            flags.insert(name.to_string(), FlagValue::Str(value));
        }
        _ => match flags.get_mut(name) {
            Some(FlagValue::List(values)) => values.push(value),
            _ => {
                flags.insert(name.to_string(), FlagValue::List(vec![value]));
            }
        },
    }
}

/// Parse `--header key=value` tokens.
///
/// Returns `None` when no header values were given.
pub fn parse_headers(value: Option<&FlagValue>) -> CliResult<Option<Vec<WebhookHeader>>> {
    let tokens: &[String] = match value {
        Some(FlagValue::List(values)) => values,
        Some(FlagValue::Str(value)) => std::slice::from_ref(value),
        Some(FlagValue::Bool(_)) | None => return Ok(None),
    };
    if tokens.is_empty() {
        return Ok(None);
    }

    tokens
        .iter()
        .map(|token| parse_header(token))
        .collect::<CliResult<Vec<_>>>()
        .map(Some)
}

/// Parse one `key=value` header token.
pub fn parse_header(token: &str) -> CliResult<WebhookHeader> {
    let (name, value) = token.split_once('=').ok_or_else(|| {
        CliError::Validation(format!("Invalid header \"{}\": expected key=value", token))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::Validation(format!(
            "Invalid header \"{}\": header name cannot be empty",
            token
        )));
    }

    Ok(WebhookHeader::new(name, value.trim()))
}
