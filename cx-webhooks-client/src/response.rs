//! Buffered HTTP response.

use reqwest::StatusCode;
use serde_json::Value;

/// A response whose body has already been read.
///
/// Failure reporting wants the body text even for non-2xx statuses, so the
/// body is always buffered before the status is inspected.
#[derive(Debug)]
pub(crate) struct Response {
    status: StatusCode,
    body: String,
}

impl Response {
    /// Read a reqwest response to completion.
    ///
    /// A body that cannot be read is treated as empty.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self { status, body }
    }

    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    pub(crate) fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Canonical reason phrase, empty for unknown codes.
    pub(crate) fn status_text(&self) -> String {
        self.status.canonical_reason().unwrap_or_default().to_string()
    }

    /// Parse the body as JSON. An empty body parses as `null`.
    pub(crate) fn json(&self) -> serde_json::Result<Value> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&self.body)
    }

    pub(crate) fn into_body(self) -> String {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> Response {
        Response {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_empty_body_is_null() {
        assert_eq!(response(200, "  ").json().unwrap(), Value::Null);
    }

    #[test]
    fn test_invalid_json() {
        assert!(response(200, "<html>").json().is_err());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(response(404, "").status_text(), "Not Found");
        assert_eq!(response(599, "").status_text(), "");
        assert!(!response(404, "").is_success());
    }
}
