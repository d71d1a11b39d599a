// Environment sources: .env files and the process environment

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;
use std::path::Path;

/// Read a `.env` style file into a key/value mapping.
///
/// The process environment is left untouched; the caller decides how the
/// returned values are merged with it.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        ConfigError::LoadError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let mut values = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| {
            ConfigError::LoadError(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        values.insert(key, value);
    }

    Ok(values)
}

/// Like [`read_env_file`], but a missing file yields an empty mapping.
pub fn read_env_file_if_exists(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    read_env_file(path)
}

/// Layered lookup over a `.env` file and the process environment.
///
/// Values already present in the process environment win over the file.
/// Empty values are treated as absent.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    file: HashMap<String, String>,
    process: HashMap<String, String>,
}

impl EnvLoader {
    /// Create a loader from explicit file and process mappings
    pub fn new(file: HashMap<String, String>, process: HashMap<String, String>) -> Self {
        Self { file, process }
    }

    /// Create a loader that layers `file` under a snapshot of the current process environment
    pub fn with_process_env(file: HashMap<String, String>) -> Self {
        Self::new(file, env::vars().collect())
    }

    /// Look up a value, process environment first
    pub fn get(&self, key: &str) -> Option<&str> {
        self.process
            .get(key)
            .or_else(|| self.file.get(key))
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Look up a value that must be present
    pub fn require(&self, key: &str) -> Result<String> {
        self.get(key)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))
    }

    /// Look up a value with a default
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }
}
