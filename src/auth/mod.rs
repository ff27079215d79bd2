//! # Session & Navigation
//!
//! The signed-in session lives in persistent storage under three keys: `token`,
//! `username` and `role`. Nothing caches it. Every component asks its [`AuthProvider`]
//! again on each operation, so a logout in one place is seen everywhere on the next call.
//!
//! The guards ([`require_auth`], [`require_role`]) and [`logout`] redirect through a
//! [`Navigator`].

pub mod storage;

pub use storage::{get_json, get_json_or, set_json, KeyValueStore, MemoryStore};

use std::sync::Arc;
use tracing::info;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "role";

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Customer,
    Owner,
    #[default]
    None,
}

impl Role {
    /// Parses the stored role string. Anything unrecognised is `Role::None`.
    pub fn from_storage(value: &str) -> Self {
        match value {
            "ROLE_CUSTOMER" => Role::Customer,
            "ROLE_OWNER" => Role::Owner,
            _ => Role::None,
        }
    }

    pub fn as_storage(&self) -> Option<&'static str> {
        match self {
            Role::Customer => Some("ROLE_CUSTOMER"),
            Role::Owner => Some("ROLE_OWNER"),
            Role::None => None,
        }
    }
}

/// A snapshot of the session at the moment it was read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub username: Option<String>,
    pub role: Role,
}

impl AuthState {
    pub fn signed_in(token: impl Into<String>, username: impl Into<String>, role: Role) -> Self {
        Self {
            token: Some(token.into()),
            username: Some(username.into()),
            role,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_customer(&self) -> bool {
        self.is_authenticated() && self.role == Role::Customer
    }

    pub fn is_owner(&self) -> bool {
        self.is_authenticated() && self.role == Role::Owner
    }
}

/// Source of the current session.
pub trait AuthProvider: Send + Sync {
    fn current(&self) -> AuthState;

    /// Forgets the session (all stored keys).
    fn clear(&self);
}

/// Where the page goes next. Implemented by the host; the browser would set `location.href`.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// [`AuthProvider`] reading the session keys from a [`KeyValueStore`].
#[derive(Clone)]
pub struct StorageAuth {
    store: Arc<dyn KeyValueStore>,
}

impl StorageAuth {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persists a session, as the login page does after a successful sign-in.
    pub fn store(&self, session: &AuthState) {
        match &session.token {
            Some(token) => self.store.set(TOKEN_KEY, token),
            None => self.store.remove(TOKEN_KEY),
        }
        match &session.username {
            Some(username) => self.store.set(USERNAME_KEY, username),
            None => self.store.remove(USERNAME_KEY),
        }
        match session.role.as_storage() {
            Some(role) => self.store.set(ROLE_KEY, role),
            None => self.store.remove(ROLE_KEY),
        }
    }
}

impl AuthProvider for StorageAuth {
    fn current(&self) -> AuthState {
        AuthState {
            token: self.store.get(TOKEN_KEY).filter(|t| !t.is_empty()),
            username: self.store.get(USERNAME_KEY),
            role: self
                .store
                .get(ROLE_KEY)
                .map(|r| Role::from_storage(&r))
                .unwrap_or_default(),
        }
    }

    fn clear(&self) {
        self.store.clear();
    }
}

/// Redirects to the login page unless someone is signed in.
pub fn require_auth(auth: &dyn AuthProvider, navigator: &dyn Navigator) -> bool {
    if auth.current().is_authenticated() {
        return true;
    }
    navigator.navigate(LOGIN_PATH);
    false
}

/// Redirects home unless the session is signed in with `role`.
pub fn require_role(auth: &dyn AuthProvider, navigator: &dyn Navigator, role: Role) -> bool {
    let state = auth.current();
    if state.is_authenticated() && state.role == role {
        return true;
    }
    navigator.navigate(HOME_PATH);
    false
}

pub fn logout(auth: &dyn AuthProvider, navigator: &dyn Navigator) {
    info!("Signing out");
    auth.clear();
    navigator.navigate(HOME_PATH);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingNavigator;

    fn auth_with(store: &MemoryStore) -> StorageAuth {
        StorageAuth::new(Arc::new(store.clone()))
    }

    #[test]
    fn test_state_is_read_fresh() {
        let store = MemoryStore::new();
        let auth = auth_with(&store);
        assert!(!auth.current().is_authenticated());

        store.set(TOKEN_KEY, "t-1");
        store.set(ROLE_KEY, "ROLE_CUSTOMER");
        let state = auth.current();
        assert!(state.is_authenticated());
        assert!(state.is_customer());
        assert!(!state.is_owner());
    }

    #[test]
    fn test_store_then_clear() {
        let store = MemoryStore::new();
        let auth = auth_with(&store);
        auth.store(&AuthState::signed_in("t-2", "ravi", Role::Owner));

        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("ROLE_OWNER"));
        assert_eq!(auth.current().username.as_deref(), Some("ravi"));

        auth.clear();
        assert_eq!(auth.current(), AuthState::default());
    }

    #[test]
    fn test_unknown_role_is_none() {
        assert_eq!(Role::from_storage("ROLE_ADMIN"), Role::None);
        assert_eq!(Role::None.as_storage(), None);
    }

    #[test]
    fn test_guards_redirect() {
        let store = MemoryStore::new();
        let auth = auth_with(&store);
        let navigator = RecordingNavigator::new();

        assert!(!require_auth(&auth, &navigator));
        assert!(!require_role(&auth, &navigator, Role::Owner));
        assert_eq!(navigator.visits(), vec![LOGIN_PATH, HOME_PATH]);

        auth.store(&AuthState::signed_in("t", "asha", Role::Customer));
        assert!(require_auth(&auth, &navigator));
        assert!(require_role(&auth, &navigator, Role::Customer));
        assert!(!require_role(&auth, &navigator, Role::Owner));
    }

    #[test]
    fn test_logout_clears_and_goes_home() {
        let store = MemoryStore::new();
        let auth = auth_with(&store);
        auth.store(&AuthState::signed_in("t", "asha", Role::Customer));
        let navigator = RecordingNavigator::new();

        logout(&auth, &navigator);

        assert!(store.is_empty());
        assert_eq!(navigator.last().as_deref(), Some(HOME_PATH));
    }
}
