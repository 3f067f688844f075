//! Mirrors slice state to durable storage.
//!
//! A [`Synchronizer`] holds one [`PersistRule`] per persisted key. After an
//! action is reduced, every rule registered for the action's slice encodes the
//! slice's *entire* current value and overwrites its key. Failures are logged
//! and dropped: the in-memory state stays authoritative and nothing is
//! retried.

use std::sync::Arc;

use crate::slices::{AppState, Slice};
use crate::storage::{keys, KeyValueStore};

/// Encodes the persisted value for one key. `Ok(None)` deletes the key.
pub type Encoder = fn(&AppState) -> Result<Option<String>, serde_json::Error>;

/// Binds a slice to a storage key.
#[derive(Clone)]
pub struct PersistRule {
    pub slice: Slice,
    pub key: &'static str,
    encode: Encoder,
    store: Arc<dyn KeyValueStore>,
}

impl PersistRule {
    pub fn new(
        slice: Slice,
        key: &'static str,
        encode: Encoder,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            slice,
            key,
            encode,
            store,
        }
    }

    async fn write(&self, state: &AppState) {
        let encoded = match (self.encode)(state) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(key = self.key, "Error encoding {}: {}", self.slice, e);
                return;
            }
        };

        let result = match encoded {
            Some(value) => self.store.set(self.key, &value).await,
            None => self.store.delete(self.key).await,
        };

        match result {
            Ok(()) => tracing::debug!(key = self.key, "Persisted {} state", self.slice),
            Err(e) => tracing::warn!(key = self.key, "Error saving {}: {}", self.slice, e),
        }
    }
}

impl std::fmt::Debug for PersistRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistRule")
            .field("slice", &self.slice)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Synchronizer {
    rules: Vec<PersistRule>,
}

impl Synchronizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: PersistRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The rules for every persisted slice.
    ///
    /// Favorites, workouts and water go to `data`; the auth token and user
    /// record go to `secure` and are deleted on logout.
    pub fn standard(data: Arc<dyn KeyValueStore>, secure: Arc<dyn KeyValueStore>) -> Self {
        Self::new()
            .with_rule(PersistRule::new(
                Slice::Favorites,
                keys::FAVORITES,
                encode_favorites,
                Arc::clone(&data),
            ))
            .with_rule(PersistRule::new(
                Slice::Workouts,
                keys::WORKOUT_LOGS,
                encode_workouts,
                Arc::clone(&data),
            ))
            .with_rule(PersistRule::new(
                Slice::Water,
                keys::WATER_INTAKE,
                encode_water,
                Arc::clone(&data),
            ))
            .with_rule(PersistRule::new(
                Slice::Water,
                keys::WATER_GOAL,
                encode_water_goal,
                data,
            ))
            .with_rule(PersistRule::new(
                Slice::Auth,
                keys::AUTH_TOKEN,
                encode_token,
                Arc::clone(&secure),
            ))
            .with_rule(PersistRule::new(
                Slice::Auth,
                keys::USER_DATA,
                encode_user,
                secure,
            ))
    }

    pub fn rules(&self) -> &[PersistRule] {
        &self.rules
    }

    /// Writes every key owned by `slice`. Never fails.
    pub async fn sync(&self, slice: Slice, state: &AppState) {
        for rule in self.rules.iter().filter(|r| r.slice == slice) {
            rule.write(state).await;
        }
    }
}

fn encode_favorites(state: &AppState) -> Result<Option<String>, serde_json::Error> {
    serde_json::to_string(&state.favorites.favorites).map(Some)
}

fn encode_workouts(state: &AppState) -> Result<Option<String>, serde_json::Error> {
    serde_json::to_string(&state.workouts.workouts).map(Some)
}

fn encode_water(state: &AppState) -> Result<Option<String>, serde_json::Error> {
    serde_json::to_string(&state.water.record()).map(Some)
}

fn encode_water_goal(state: &AppState) -> Result<Option<String>, serde_json::Error> {
    Ok(Some(state.water.goal.to_string()))
}

fn encode_token(state: &AppState) -> Result<Option<String>, serde_json::Error> {
    Ok(state.auth.token.clone())
}

fn encode_user(state: &AppState) -> Result<Option<String>, serde_json::Error> {
    state.auth.user.as_ref().map(serde_json::to_string).transpose()
}
