//! Client error types.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors returned by the webhooks client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The token endpoint rejected the exchange or returned an unusable body.
    #[error("Authentication failed: {status} {status_text}{}", detail(.body))]
    Authentication {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
        /// Response body, best effort.
        body: String,
    },

    /// A webhook API call returned a non-2xx status.
    #[error("Failed to {operation}: {status} {status_text}{}", detail(.body))]
    Request {
        /// Logical operation, e.g. `list webhooks`.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
        /// Response body, best effort.
        body: String,
    },

    /// A successful response did not have the expected shape.
    #[error("Unexpected response from {operation}: {message}")]
    Decode {
        /// Logical operation.
        operation: &'static str,
        /// What was wrong with the body.
        message: String,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// No HTTP response was received.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// Get the HTTP status code, if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } | Self::Request { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is an authentication failure.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}

fn detail(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(" - {}", body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_message() {
        let err = ClientError::Request {
            operation: "list webhooks",
            status: 503,
            status_text: "Service Unavailable".to_string(),
            body: "maintenance\n".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Failed to list webhooks: 503 Service Unavailable - maintenance"
        );
        assert_eq!(err.status_code(), Some(503));
    }

    #[test]
    fn test_authentication_error_without_body() {
        let err = ClientError::Authentication {
            status: 401,
            status_text: "Unauthorized".to_string(),
            body: String::new(),
        };

        assert_eq!(err.to_string(), "Authentication failed: 401 Unauthorized");
        assert!(err.is_authentication());
    }

    #[test]
    fn test_decode_has_no_status() {
        let err = ClientError::Decode {
            operation: "create webhook",
            message: "expected a JSON object".to_string(),
        };
        assert_eq!(err.status_code(), None);
        assert!(!err.is_authentication());
    }
}
