// ABOUTME: Tokenkeep configuration library
// ABOUTME: Environment variable names and the auth storage configuration built from them

pub mod config;
pub mod constants;

pub use config::{tokenkeep_dir, AuthConfig, ConfigError, StorageBackend};
