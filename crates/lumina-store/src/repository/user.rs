//! # User Repository
//!
//! Stored accounts, equality-check authentication and credential edits.
//!
//! Passwords are persisted in plaintext: this is an offline, single-store
//! demo credential store, and hardening it is an explicit non-goal. The
//! authenticated [`User`] handed back to callers never carries the
//! password field.

use tracing::debug;

use lumina_core::{StoredUser, User};

use crate::error::StoreResult;
use crate::kv::{KvStore, KEY_USERS};

/// Repository for user accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    kv: KvStore,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(kv: KvStore) -> Self {
        UserRepository { kv }
    }

    /// All stored accounts.
    pub async fn list(&self) -> Vec<StoredUser> {
        self.kv.read_collection(KEY_USERS).await
    }

    /// Checks a username/password pair against the stored accounts.
    ///
    /// Returns the matching user with the password stripped, or `None`.
    pub async fn authenticate(&self, username: &str, password: &str) -> Option<User> {
        self.list()
            .await
            .iter()
            .find(|u| u.username == username && u.password == password)
            .map(StoredUser::to_user)
    }

    /// Updates an account's username and/or password.
    ///
    /// ## Behavior
    /// - `username`: applied when `Some` and non-empty
    /// - `password`: applied only when `Some` and non-blank. An empty or
    ///   whitespace-only value means "keep the current password", which
    ///   is how the settings form expresses "no change"
    /// - unknown id: no-op
    pub async fn update_credentials(
        &self,
        id: u32,
        username: Option<&str>,
        password: Option<&str>,
    ) -> StoreResult<()> {
        let mut users = self.list().await;
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(());
        };
        debug!(id = id, "Updating credentials");

        if let Some(name) = username {
            if !name.trim().is_empty() {
                user.username = name.to_string();
            }
        }
        if let Some(pass) = password {
            if !pass.trim().is_empty() {
                user.password = pass.to_string();
            }
        }

        self.kv.write_collection(KEY_USERS, &users).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
