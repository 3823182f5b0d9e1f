// ABOUTME: In-memory holder for the application's single authentication token
// ABOUTME: Plain holder plus a cloneable shared handle injected into every consumer

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// Holds the current bearer token, if any.
///
/// The value is stored exactly as given. An empty string is held as
/// `Some("")` but does not count as logged in.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenHolder {
    token: Option<String>,
}

impl TokenHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the held token
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Drop the held token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// True only when a non-empty token is held
    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

impl fmt::Debug for TokenHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenHolder")
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

/// Shared handle to one [`TokenHolder`].
///
/// Build one at startup and clone it into whatever needs the token; every
/// clone sees the same value.
#[derive(Clone, Default)]
pub struct SharedTokenHolder {
    inner: Arc<RwLock<TokenHolder>>,
}

impl SharedTokenHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        self.write().set_token(token);
        debug!("Auth token set");
    }

    pub fn get_token(&self) -> Option<String> {
        self.read().get_token().map(str::to_owned)
    }

    pub fn clear_token(&self) {
        self.write().clear_token();
        debug!("Auth token cleared");
    }

    pub fn is_logged_in(&self) -> bool {
        self.read().is_logged_in()
    }

    fn read(&self) -> RwLockReadGuard<'_, TokenHolder> {
        self.inner.read().unwrap_or_else(|poisoned| {
            warn!("Token holder lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, TokenHolder> {
        self.inner.write().unwrap_or_else(|poisoned| {
            warn!("Token holder lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl From<TokenHolder> for SharedTokenHolder {
    fn from(holder: TokenHolder) -> Self {
        Self {
            inner: Arc::new(RwLock::new(holder)),
        }
    }
}

impl fmt::Debug for SharedTokenHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedTokenHolder").field(&*self.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_new_holder_is_logged_out() {
        let holder = TokenHolder::new();
        assert_eq!(holder.get_token(), None);
        assert!(!holder.is_logged_in());
    }

    #[rstest]
    #[case("abc123")]
    #[case("")]
    #[case("  padded token  ")]
    #[case("eyJhbGciOiJIUzI1NiJ9.e30.sig")]
    #[case("токен-🔑")]
    fn test_get_returns_exactly_what_was_set(#[case] token: &str) {
        let mut holder = TokenHolder::new();
        holder.set_token(token);
        assert_eq!(holder.get_token(), Some(token));
    }

    #[test]
    fn test_non_empty_token_is_logged_in() {
        let mut holder = TokenHolder::new();
        holder.set_token("x");
        assert!(holder.is_logged_in());
    }

    #[test]
    fn test_empty_token_is_held_but_logged_out() {
        let mut holder = TokenHolder::new();
        holder.set_token("");
        assert_eq!(holder.get_token(), Some(""));
        assert!(!holder.is_logged_in());
    }

    #[rstest]
    #[case("abc123")]
    #[case("")]
    fn test_clear_after_set(#[case] token: &str) {
        let mut holder = TokenHolder::new();
        holder.set_token(token);
        holder.clear_token();
        assert_eq!(holder.get_token(), None);
        assert!(!holder.is_logged_in());
    }

    #[test]
    fn test_clear_on_empty_holder_is_noop() {
        let mut holder = TokenHolder::new();
        holder.clear_token();
        assert_eq!(holder, TokenHolder::new());
    }

    #[test]
    fn test_set_overwrites_previous_token() {
        let mut holder = TokenHolder::new();
        holder.set_token("first");
        holder.set_token("second");
        assert_eq!(holder.get_token(), Some("second"));
    }

    #[test]
    fn test_login_logout_scenario() {
        let mut holder = TokenHolder::new();

        holder.set_token("abc123");
        assert_eq!(holder.get_token(), Some("abc123"));
        assert!(holder.is_logged_in());

        holder.clear_token();
        assert_eq!(holder.get_token(), None);
        assert!(!holder.is_logged_in());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let mut holder = TokenHolder::new();
        holder.set_token("super-secret");

        let rendered = format!("{:?}", SharedTokenHolder::from(holder));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("has_token: true"));
    }

    #[test]
    fn test_shared_clones_see_same_token() {
        let shared = SharedTokenHolder::new();
        let consumer = shared.clone();

        shared.set_token("abc123");
        assert_eq!(consumer.get_token().as_deref(), Some("abc123"));
        assert!(consumer.is_logged_in());

        consumer.clear_token();
        assert_eq!(shared.get_token(), None);
        assert!(!shared.is_logged_in());
    }

    #[test]
    fn test_shared_handle_across_threads() {
        let shared = SharedTokenHolder::new();
        let writer = shared.clone();

        std::thread::spawn(move || writer.set_token("from-thread"))
            .join()
            .unwrap();

        assert_eq!(shared.get_token().as_deref(), Some("from-thread"));
    }

    #[test]
    fn test_shared_recovers_from_poisoned_lock() {
        let shared = SharedTokenHolder::new();
        shared.set_token("kept");

        let poisoner = shared.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(shared.get_token().as_deref(), Some("kept"));
        shared.clear_token();
        assert!(!shared.is_logged_in());
    }
}
