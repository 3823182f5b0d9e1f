// ABOUTME: Auth session pairing the shared token holder with a persistence backend
// ABOUTME: Restores the token at startup and writes through on login and logout

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use tokenkeep_config::{AuthConfig, StorageBackend};

use crate::{
    error::AuthResult,
    holder::SharedTokenHolder,
    store::{FileTokenStore, MemoryTokenStore, TokenStore},
};

/// Token holder backed by a [`TokenStore`]
pub struct AuthSession<S: TokenStore> {
    holder: SharedTokenHolder,
    store: S,
    // Held across the holder update and the store call so both agree
    writes: Mutex<()>,
}

impl<S: TokenStore> AuthSession<S> {
    pub fn new(holder: SharedTokenHolder, store: S) -> Self {
        Self {
            holder,
            store,
            writes: Mutex::new(()),
        }
    }

    /// Load the persisted token into the holder.
    ///
    /// Returns `true` if a token was found. On a store error the holder is
    /// left as it was.
    pub async fn restore(&self) -> AuthResult<bool> {
        let _writes = self.writes.lock().await;
        match self.store.load().await? {
            Some(token) => {
                self.holder.set_token(token);
                debug!("Restored auth token from store");
                Ok(true)
            }
            None => {
                debug!("No persisted auth token to restore");
                Ok(false)
            }
        }
    }

    /// Hold the token and persist it
    pub async fn set_token(&self, token: impl Into<String>) -> AuthResult<()> {
        let token = token.into();
        let _writes = self.writes.lock().await;
        self.holder.set_token(token.as_str());
        self.store.save(&token).await
    }

    pub fn get_token(&self) -> Option<String> {
        self.holder.get_token()
    }

    /// Log out. The in-memory token is dropped even if the store fails.
    pub async fn clear_token(&self) -> AuthResult<()> {
        let _writes = self.writes.lock().await;
        self.holder.clear_token();
        if let Err(e) = self.store.remove().await {
            warn!("Failed to remove persisted auth token: {}", e);
            return Err(e);
        }
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.holder.is_logged_in()
    }

    /// Shared handle for consumers that only need to read the token
    pub fn holder(&self) -> &SharedTokenHolder {
        &self.holder
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Build a session from configuration and restore any persisted token
pub async fn open_session(config: &AuthConfig) -> AuthResult<AuthSession<Box<dyn TokenStore>>> {
    let store: Box<dyn TokenStore> = match config.backend {
        StorageBackend::Memory => Box::new(MemoryTokenStore::new()),
        StorageBackend::File => Box::new(FileTokenStore::new(&config.auth_file)),
    };

    let session = AuthSession::new(SharedTokenHolder::new(), store);
    let restored = session.restore().await?;
    info!(backend = ?config.backend, restored, "Auth session opened");

    Ok(session)
}

/// Build a session directly from the environment
pub async fn open_session_from_env() -> AuthResult<AuthSession<Box<dyn TokenStore>>> {
    let config = AuthConfig::from_env()?;
    open_session(&config).await
}
