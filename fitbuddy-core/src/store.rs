//! The application store: slice state plus its persistence.
//!
//! A `Store` is an explicit context object. Front ends create one with
//! [`Store::hydrate`] at startup and pass it to whatever dispatches actions.

use std::sync::Arc;

use crate::day::Clock;
use crate::models::{AuthSession, Exercise, WorkoutLog};
use crate::persist::Synchronizer;
use crate::slices::{
    Action, AppState, AuthAction, FavoritesAction, WaterAction, WaterRecord, WorkoutAction,
};
use crate::storage::{get_json, keys, KeyValueStore, SecureStorage};

pub struct Store {
    state: AppState,
    sync: Synchronizer,
    clock: Arc<dyn Clock>,
}

impl Store {
    /// Creates a store with default state. Nothing is read from storage.
    pub fn new(sync: Synchronizer, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: AppState::new(clock.today()),
            sync,
            clock,
        }
    }

    /// Loads every persisted slice, then attaches the standard synchronizer.
    ///
    /// Missing keys leave defaults in place. Read or decode failures are
    /// logged and also leave defaults; hydration itself never fails.
    pub async fn hydrate(
        data: Arc<dyn KeyValueStore>,
        secure: SecureStorage,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let today = clock.today();
        let mut state = AppState::new(today);

        for action in load_actions(data.as_ref(), &secure).await {
            state.reduce(action, today);
        }

        tracing::debug!(
            favorites = state.favorites.len(),
            workouts = state.workouts.len(),
            authenticated = state.auth.is_authenticated,
            "Hydrated store"
        );

        Self {
            state,
            sync: Synchronizer::standard(data, secure.backend()),
            clock,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Reduces the action, then persists the slice it touched.
    ///
    /// Persistence failures are logged by the synchronizer and never returned.
    pub async fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        let slice = action.slice();

        self.state.reduce(action, self.clock.today());
        self.sync.sync(slice, &self.state).await;
    }
}

/// Reads storage and turns each present value into the action that restores it.
async fn load_actions(data: &dyn KeyValueStore, secure: &SecureStorage) -> Vec<Action> {
    let mut actions = Vec::new();

    if let Some(favorites) = load_or_log::<Vec<Exercise>>(data, keys::FAVORITES).await {
        actions.push(FavoritesAction::SetFavorites(favorites).into());
    }

    if let Some(workouts) = load_or_log::<Vec<WorkoutLog>>(data, keys::WORKOUT_LOGS).await {
        actions.push(WorkoutAction::SetWorkouts(workouts).into());
    }

    if let Some(goal) = load_or_log::<u32>(data, keys::WATER_GOAL).await {
        actions.push(WaterAction::SetWaterGoal(goal).into());
    }

    if let Some(record) = load_or_log::<WaterRecord>(data, keys::WATER_INTAKE).await {
        actions.push(WaterAction::LoadWaterData(record).into());
    }

    // Only a complete session counts as logged in
    if let (Some(token), Some(user)) = (secure.token().await, secure.user_data().await) {
        actions.push(AuthAction::LoginSuccess(AuthSession { user, token }).into());
    }

    actions
}

async fn load_or_log<T: serde::de::DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Option<T> {
    match get_json(store, key).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Error loading {}: {}", key, e);
            None
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("sync", &self.sync)
            .finish_non_exhaustive()
    }
}
