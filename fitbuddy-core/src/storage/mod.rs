//! Device-local key-value storage.
//!
//! Values are strings, almost always JSON. Each key is owned by exactly one
//! component, so stores do no cross-key coordination.

mod error;
mod file;
mod memory;
mod secure;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use secure::SecureStorage;

/// Keys written to the data store.
pub mod keys {
    pub const FAVORITES: &str = "favorites";
    pub const WORKOUT_LOGS: &str = "workout_logs";
    pub const WATER_INTAKE: &str = "water_intake";
    pub const WATER_GOAL: &str = "water_goal";
    pub const APP_THEME: &str = "app_theme";
    /// Secure store
    pub const AUTH_TOKEN: &str = "auth_token";
    /// Secure store
    pub const USER_DATA: &str = "user_data";
}

/// Async string-keyed storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` if the key has never been written or was deleted.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deleting a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads and decodes a JSON value.
pub async fn get_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Encodes a value as JSON and writes it.
pub async fn set_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw).await
}
