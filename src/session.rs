use crate::config::{LOGGED_IN_KEY, TOKEN_KEY};
use crate::storage::KeyValueStore;

/// The persisted session: a logged-in flag and the last auth token.
#[derive(Debug, Clone)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Only the exact string `"true"` counts as logged in.
    pub fn is_logged_in(&self) -> bool {
        self.store.get(LOGGED_IN_KEY).as_deref() == Some("true")
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    pub fn record_login(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
        self.store.set(LOGGED_IN_KEY, "true");
        log::info!("Session started");
    }

    /// Sign-up keeps the token but does not flip the flag; the user still logs in.
    pub fn record_signup(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn logout(&self) {
        self.store.remove(LOGGED_IN_KEY);
        self.store.remove(TOKEN_KEY);
        log::info!("Logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_fresh_store_is_logged_out() {
        let session = Session::new(MemoryStorage::default());
        assert!(!session.is_logged_in());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_login_survives_reload() {
        let store = MemoryStorage::default();
        Session::new(store.clone()).record_login("tok-1");

        let reloaded = Session::new(store);
        assert!(reloaded.is_logged_in());
        assert_eq!(reloaded.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_logout_clears_flag_and_token() {
        let store = MemoryStorage::default();
        let session = Session::new(store.clone());
        session.record_login("tok-1");
        session.logout();

        let reloaded = Session::new(store.clone());
        assert!(!reloaded.is_logged_in());
        assert!(reloaded.token().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_signup_stores_token_only() {
        let session = Session::new(MemoryStorage::default());
        session.record_signup("tok-2");
        assert_eq!(session.token().as_deref(), Some("tok-2"));
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_flag_requires_exact_true() {
        let store = MemoryStorage::default();
        store.set(LOGGED_IN_KEY, "yes");
        assert!(!Session::new(store.clone()).is_logged_in());
        store.set(LOGGED_IN_KEY, "true");
        assert!(Session::new(store).is_logged_in());
    }
}
