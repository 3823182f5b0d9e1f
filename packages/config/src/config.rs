// ABOUTME: Environment-driven configuration for token storage
// ABOUTME: Selects the persistence backend and resolves the auth file location

use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use crate::constants::{
    AUTH_FILE_NAME, HOME, TOKENKEEP_AUTH_FILE, TOKENKEEP_DIR_NAME, TOKENKEEP_PERSIST,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
    #[error("Could not determine home directory")]
    HomeDirUnavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory, // Token lives only for the process lifetime
    File,   // Token is mirrored to the auth file
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    pub backend: StorageBackend,
    pub auth_file: PathBuf,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let persist = match env::var(TOKENKEEP_PERSIST) {
            Ok(value) => parse_bool(TOKENKEEP_PERSIST, &value)?,
            Err(_) => false,
        };

        let backend = if persist {
            StorageBackend::File
        } else {
            StorageBackend::Memory
        };

        let auth_file = match env::var(TOKENKEEP_AUTH_FILE) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => tokenkeep_dir()?.join(AUTH_FILE_NAME),
        };

        debug!(?backend, auth_file = %auth_file.display(), "Loaded auth configuration");

        Ok(AuthConfig { backend, auth_file })
    }

    /// In-memory configuration that never touches the filesystem
    pub fn in_memory() -> Self {
        AuthConfig {
            backend: StorageBackend::Memory,
            auth_file: PathBuf::new(),
        }
    }
}

/// Get the path to the Tokenkeep directory (~/.tokenkeep)
pub fn tokenkeep_dir() -> Result<PathBuf, ConfigError> {
    // HOME first so tests can redirect it
    if let Ok(home) = env::var(HOME) {
        return Ok(PathBuf::from(home).join(TOKENKEEP_DIR_NAME));
    }
    dirs::home_dir()
        .map(|home| home.join(TOKENKEEP_DIR_NAME))
        .ok_or(ConfigError::HomeDirUnavailable)
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
