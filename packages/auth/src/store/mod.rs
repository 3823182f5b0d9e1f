// ABOUTME: Persistence capability for the authentication token
// ABOUTME: Trait injected into AuthSession, with in-memory and TOML file implementations

pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::error::AuthResult;

pub use file::{FileTokenStore, StoredToken};
pub use memory::MemoryTokenStore;

/// Backend that keeps the token across process restarts
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, `None` if nothing is stored
    async fn load(&self) -> AuthResult<Option<String>>;

    /// Persist the token, replacing any previous value
    async fn save(&self, token: &str) -> AuthResult<()>;

    /// Forget the persisted token. Succeeds when nothing is stored.
    async fn remove(&self) -> AuthResult<()>;
}

#[async_trait]
impl<S: TokenStore + ?Sized> TokenStore for Box<S> {
    async fn load(&self) -> AuthResult<Option<String>> {
        (**self).load().await
    }

    async fn save(&self, token: &str) -> AuthResult<()> {
        (**self).save(token).await
    }

    async fn remove(&self) -> AuthResult<()> {
        (**self).remove().await
    }
}
