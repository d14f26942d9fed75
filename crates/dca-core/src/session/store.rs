//! Session persistence.
//!
//! The session lives in two string keys of a local key/value store:
//! `token` (opaque) and `user` (JSON `{username, role}`).

use super::model::{Session, User};
use crate::error::Result;
use std::sync::Arc;

/// Storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialized user record.
pub const USER_KEY: &str = "user";

/// Local persistent string key/value storage.
///
/// Implementations decide where the values live (a TOML file, memory, ...).
pub trait KeyValueStore: Send + Sync {
    /// Reads a key. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// An abstract repository for the current session.
///
/// Controllers receive this at construction instead of reaching for
/// process-wide storage, so tests can hand in an in-memory fake.
pub trait SessionRepository: Send + Sync {
    /// Returns the stored session, or `None` when either key is missing or
    /// the user record does not parse. Never fails.
    fn load(&self) -> Option<Session>;

    /// Persists both keys. The two writes are independent.
    fn save(&self, session: &Session) -> Result<()>;

    /// Removes both keys.
    fn clear(&self) -> Result<()>;
}

/// `SessionRepository` over any `KeyValueStore`.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read session key, treating as absent");
                None
            }
        }
    }
}

impl SessionRepository for SessionStore {
    fn load(&self) -> Option<Session> {
        let token = self.read(TOKEN_KEY)?;
        let raw_user = self.read(USER_KEY)?;

        if token.is_empty() || raw_user.is_empty() {
            return None;
        }

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                tracing::debug!(error = %e, "Stored user record is malformed");
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let user_json = serde_json::to_string(&session.user)?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USER_KEY, &user_json)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(USER_KEY)?;
        Ok(())
    }
}
