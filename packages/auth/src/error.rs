// ABOUTME: Error types for token persistence and session setup
// ABOUTME: The in-memory holder itself is infallible; only stores and configuration can fail

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AuthError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Check if this error came from the persistence backend
    pub fn is_storage_error(&self) -> bool {
        matches!(self, AuthError::Storage(_) | AuthError::Io(_))
    }
}

impl From<tokenkeep_config::ConfigError> for AuthError {
    fn from(err: tokenkeep_config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<toml::ser::Error> for AuthError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
