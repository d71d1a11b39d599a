// Configuration for the Carerix webhooks client

pub mod env;
pub mod error;
pub mod validation;

pub use env::{EnvLoader, read_env_file, read_env_file_if_exists};
pub use error::{ConfigError, Result};
pub use validation::ConfigValidator;

use std::fmt;
use std::path::Path;

/// Environment keys read by [`CxConfig::from_loader`]
pub mod keys {
    pub const AUTH_ENDPOINT: &str = "CX_AUTH_ENDPOINT";
    pub const CLIENT_ID: &str = "CX_CLIENT_ID";
    pub const CLIENT_SECRET: &str = "CX_CLIENT_SECRET";
    pub const SCOPES: &str = "CX_SCOPES";
    pub const APPLICATION_ID: &str = "CX_APPLICATION_ID";
    pub const BASE_URL: &str = "CX_BASE_URL";
}

/// Base URL used when `CX_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "https://api.carerix.io/webhooks/v1";

/// Env file read when no explicit path is given
pub const DEFAULT_ENV_FILE: &str = ".env";

/// OAuth2 client-credentials settings
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthConfig {
    pub auth_endpoint: String,
    pub client_id: String,
    pub client_secret: String,
    pub scopes: Option<String>,
}

impl OAuthConfig {
    pub fn new(
        auth_endpoint: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            auth_endpoint: auth_endpoint.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            scopes: None,
        }
    }

    pub fn with_scopes(mut self, scopes: impl Into<String>) -> Self {
        self.scopes = Some(scopes.into());
        self
    }
}

// The secret must never end up in logs or panic messages.
impl fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("auth_endpoint", &self.auth_endpoint)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("scopes", &self.scopes)
            .finish()
    }
}

/// Validated client configuration, built once per process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CxConfig {
    pub base_url: String,
    pub application_id: String,
    pub oauth: OAuthConfig,
}

impl CxConfig {
    /// Build and validate a configuration record.
    ///
    /// Fails with [`ConfigError::MissingKey`] when a required value is empty.
    pub fn new(
        base_url: impl Into<String>,
        application_id: impl Into<String>,
        oauth: OAuthConfig,
    ) -> Result<Self> {
        let config = Self {
            base_url: base_url.into(),
            application_id: application_id.into(),
            oauth,
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration from layered environment sources
    pub fn from_loader(loader: &EnvLoader) -> Result<Self> {
        let oauth = OAuthConfig {
            auth_endpoint: loader.require(keys::AUTH_ENDPOINT)?,
            client_id: loader.require(keys::CLIENT_ID)?,
            client_secret: loader.require(keys::CLIENT_SECRET)?,
            scopes: loader.get(keys::SCOPES).map(str::to_string),
        };
        let application_id = loader.require(keys::APPLICATION_ID)?;
        let base_url = loader.get_or(keys::BASE_URL, DEFAULT_BASE_URL);

        Self::new(base_url, application_id, oauth)
    }

    /// Load configuration from an env file layered under the process environment.
    ///
    /// With `None` the default `.env` is read if it exists. An explicit path
    /// must exist.
    pub fn load(env_path: Option<&Path>) -> Result<Self> {
        let file = match env_path {
            Some(path) => read_env_file(path)?,
            None => read_env_file_if_exists(Path::new(DEFAULT_ENV_FILE))?,
        };
        Self::from_loader(&EnvLoader::with_process_env(file))
    }

    fn validate(&self) -> Result<()> {
        let required = [
            (keys::AUTH_ENDPOINT, &self.oauth.auth_endpoint),
            (keys::CLIENT_ID, &self.oauth.client_id),
            (keys::CLIENT_SECRET, &self.oauth.client_secret),
            (keys::APPLICATION_ID, &self.application_id),
        ];
        for (key, value) in required {
            ConfigValidator::required(value, key)?;
        }

        ConfigValidator::is_url(&self.oauth.auth_endpoint, keys::AUTH_ENDPOINT)?;
        ConfigValidator::is_url(&self.base_url, keys::BASE_URL)?;
        Ok(())
    }
}
