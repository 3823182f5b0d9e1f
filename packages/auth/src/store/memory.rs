// ABOUTME: In-memory token store with no I/O
// ABOUTME: Used when persistence is disabled and as a test backend

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::TokenStore;
use crate::error::AuthResult;

/// Store that keeps the token in memory only
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already "persisted"
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> AuthResult<Option<String>> {
        Ok(self.token.lock().await.clone())
    }

    async fn save(&self, token: &str) -> AuthResult<()> {
        *self.token.lock().await = Some(token.to_string());
        Ok(())
    }

    async fn remove(&self) -> AuthResult<()> {
        *self.token.lock().await = None;
        Ok(())
    }
}
