//! Credential storage kept apart from regular app data.
//!
//! Reads are best-effort: failures are logged and reported as absent, so a
//! broken credential store degrades to "logged out" rather than an error.

use std::sync::Arc;

use super::{get_json, keys, KeyValueStore};
use crate::models::User;

#[derive(Clone)]
pub struct SecureStorage {
    backend: Arc<dyn KeyValueStore>,
}

impl SecureStorage {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// The underlying store, for components that write credential keys.
    pub fn backend(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.backend)
    }

    pub async fn token(&self) -> Option<String> {
        match self.backend.get(keys::AUTH_TOKEN).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Error retrieving token: {}", e);
                None
            }
        }
    }

    pub async fn user_data(&self) -> Option<User> {
        match get_json(self.backend.as_ref(), keys::USER_DATA).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Error retrieving user data: {}", e);
                None
            }
        }
    }
}

impl std::fmt::Debug for SecureStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureStorage").finish_non_exhaustive()
    }
}
