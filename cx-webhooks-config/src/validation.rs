// Configuration validation

use crate::{ConfigError, Result};

/// Validation rules applied while building a configuration record
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a required key has a value once trimmed
    pub fn required(value: &str, key: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::MissingKey(key.to_string()));
        }
        Ok(())
    }

    /// Validate that a value is an absolute http(s) URL
    pub fn is_url(value: &str, field: &str) -> Result<()> {
        let parsed = url::Url::parse(value).map_err(|e| {
            ConfigError::ValidationError(format!("{} must be a valid URL: {}", field, e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::ValidationError(format!(
                "{} must use http or https, got {}",
                field,
                parsed.scheme()
            )));
        }
        Ok(())
    }
}
