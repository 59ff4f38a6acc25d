//! Application shell state: whether the user is logged in, mirrored into a
//! key-value store so it survives restarts.
//!
//! The form never touches this module; the front end forwards accepted
//! submissions to [`Session::login`].

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use log::{debug, info};

use crate::error::StoreError;

/// Key the login flag is stored under.
pub const LOGIN_KEY: &str = "isLoggedIn";

/// String key-value storage backing the session.
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Get the value for a key.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Set the value for a key.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store, used for tests and when no data directory exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersistenceStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).map(|v| v.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Page the shell should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Home,
}

/// Logged-in flag plus the store it is persisted to.
pub struct Session {
    store: Arc<dyn PersistenceStore>,
    authenticated: bool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.authenticated)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Read the stored flag once. Anything other than `"true"` means logged out.
    pub async fn restore(store: impl PersistenceStore + 'static) -> Result<Self, StoreError> {
        Self::restore_shared(Arc::new(store)).await
    }

    pub async fn restore_shared(store: Arc<dyn PersistenceStore>) -> Result<Self, StoreError> {
        let stored = store.get(LOGIN_KEY).await?;
        let authenticated = stored.as_deref() == Some("true");
        debug!("Restored session: stored={:?} authenticated={}", stored, authenticated);
        Ok(Self {
            store,
            authenticated,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn view(&self) -> View {
        if self.authenticated {
            View::Home
        } else {
            View::Login
        }
    }

    /// Mark the user logged in. Credentials are accepted as-is.
    ///
    /// The flag only flips once the store has accepted the write.
    pub async fn login(&mut self, email: &str, _password: &str) -> Result<(), StoreError> {
        self.store.set(LOGIN_KEY, "true").await?;
        self.authenticated = true;
        info!("Logged in as {}", email);
        Ok(())
    }

    pub async fn logout(&mut self) -> Result<(), StoreError> {
        self.store.set(LOGIN_KEY, "false").await?;
        self.authenticated = false;
        info!("Logged out");
        Ok(())
    }
}
