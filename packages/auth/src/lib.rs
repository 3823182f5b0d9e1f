// ABOUTME: Tokenkeep authentication library holding the application's bearer token
// ABOUTME: In-memory holder, shared handle, and optional persistence through an injected store

pub mod error;
pub mod holder;
pub mod session;
pub mod store;

// Re-export main types
pub use error::{AuthError, AuthResult};
pub use holder::{SharedTokenHolder, TokenHolder};
pub use session::{open_session, open_session_from_env, AuthSession};
pub use store::{FileTokenStore, MemoryTokenStore, StoredToken, TokenStore};
