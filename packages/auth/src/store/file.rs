// ABOUTME: TOML file backend for the persisted authentication token
// ABOUTME: Writes ~/.tokenkeep/auth.toml by default, deletes it on logout

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error};

use super::TokenStore;
use crate::error::{AuthError, AuthResult};

/// Token record as written to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,
    pub saved_at: DateTime<Utc>,
}

/// Store that keeps the token in a TOML file
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> AuthResult<Option<String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No auth file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredToken = toml::from_str(&content).map_err(|e| {
            error!("Failed to parse auth file {}: {}", self.path.display(), e);
            AuthError::storage(format!("Invalid auth file: {}", e))
        })?;

        debug!("Loaded auth token saved at {}", stored.saved_at);
        Ok(Some(stored.token))
    }

    async fn save(&self, token: &str) -> AuthResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let stored = StoredToken {
            token: token.to_string(),
            saved_at: Utc::now(),
        };
        let toml_content = toml::to_string_pretty(&stored)?;

        fs::write(&self.path, toml_content).await.map_err(|e| {
            error!("Failed to write auth file {}: {}", self.path.display(), e);
            AuthError::from(e)
        })?;

        debug!("Saved auth token to {}", self.path.display());
        Ok(())
    }

    async fn remove(&self) -> AuthResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("Removed auth file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
