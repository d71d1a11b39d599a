//! Error types for the webhooks CLI.

use cx_webhooks_client::ClientError;
use cx_webhooks_config::ConfigError;
use std::fmt;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug)]
pub enum CliError {
    /// No command given, or help requested
    Usage,

    /// Command name not recognized
    UnknownCommand(String),

    /// Malformed command-line input
    Validation(String),

    /// Configuration missing or invalid
    Config(ConfigError),

    /// Authentication or API request failure
    Client(ClientError),

    /// Result could not be rendered
    Output(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage => write!(f, "No command given"),
            CliError::UnknownCommand(name) => write!(f, "Unknown command: {}", name),
            CliError::Validation(msg) => write!(f, "Validation error: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Client(e) => write!(f, "{}", e),
            CliError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Client(e) => Some(e),
            _ => None,
        }
    }
}

impl CliError {
    /// Whether the usage text should accompany this error.
    pub fn shows_usage(&self) -> bool {
        matches!(self, CliError::Usage | CliError::UnknownCommand(_))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<ClientError> for CliError {
    fn from(e: ClientError) -> Self {
        CliError::Client(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}
