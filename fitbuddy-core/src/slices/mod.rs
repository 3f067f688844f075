//! Domain slices.
//!
//! Each slice owns one collection and exposes a pure reducer. Reducers never
//! fail and never touch storage; persistence is layered on by
//! [`crate::persist::Synchronizer`].

pub mod auth;
pub mod favorites;
pub mod water;
pub mod workouts;

use chrono::NaiveDate;
use std::fmt;

pub use auth::{AuthAction, AuthState};
pub use favorites::{FavoritesAction, FavoritesState};
pub use water::{WaterAction, WaterRecord, WaterState};
pub use workouts::{WorkoutAction, WorkoutsState};

/// Identifies which slice an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    Auth,
    Favorites,
    Workouts,
    Water,
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slice::Auth => write!(f, "auth"),
            Slice::Favorites => write!(f, "favorites"),
            Slice::Workouts => write!(f, "workout"),
            Slice::Water => write!(f, "water"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Favorites(FavoritesAction),
    Workouts(WorkoutAction),
    Water(WaterAction),
}

impl Action {
    pub fn slice(&self) -> Slice {
        match self {
            Action::Auth(_) => Slice::Auth,
            Action::Favorites(_) => Slice::Favorites,
            Action::Workouts(_) => Slice::Workouts,
            Action::Water(_) => Slice::Water,
        }
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<FavoritesAction> for Action {
    fn from(action: FavoritesAction) -> Self {
        Action::Favorites(action)
    }
}

impl From<WorkoutAction> for Action {
    fn from(action: WorkoutAction) -> Self {
        Action::Workouts(action)
    }
}

impl From<WaterAction> for Action {
    fn from(action: WaterAction) -> Self {
        Action::Water(action)
    }
}

/// The combined state of every slice.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub auth: AuthState,
    pub favorites: FavoritesState,
    pub workouts: WorkoutsState,
    pub water: WaterState,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            auth: AuthState::default(),
            favorites: FavoritesState::default(),
            workouts: WorkoutsState::default(),
            water: WaterState::new(today),
        }
    }

    /// Routes the action to its slice's reducer. Other slices are untouched.
    pub fn reduce(&mut self, action: Action, today: NaiveDate) {
        match action {
            Action::Auth(a) => self.auth = std::mem::take(&mut self.auth).reduce(a),
            Action::Favorites(a) => {
                self.favorites = std::mem::take(&mut self.favorites).reduce(a)
            }
            Action::Workouts(a) => self.workouts = std::mem::take(&mut self.workouts).reduce(a),
            Action::Water(a) => self.water = self.water.clone().reduce(a, today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exercise, WorkoutLog};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_action_slice() {
        assert_eq!(Action::from(AuthAction::Logout).slice(), Slice::Auth);
        assert_eq!(
            Action::from(WorkoutAction::ClearWorkouts).slice(),
            Slice::Workouts
        );
        assert_eq!(Action::from(WaterAction::ResetWater).slice(), Slice::Water);
        assert_eq!(
            Action::from(FavoritesAction::RemoveFavorite("x".into())).slice(),
            Slice::Favorites
        );
    }

    #[test]
    fn test_reduce_only_touches_target_slice() {
        let mut state = AppState::new(today());
        state.reduce(
            FavoritesAction::AddFavorite(Exercise::new("Plank")).into(),
            today(),
        );
        let before = state.clone();

        state.reduce(
            WorkoutAction::LogWorkout(WorkoutLog::new("Plank", 1, 1)).into(),
            today(),
        );

        assert_eq!(state.favorites, before.favorites);
        assert_eq!(state.auth, before.auth);
        assert_eq!(state.water, before.water);
        assert_eq!(state.workouts.workouts.len(), 1);
    }

    #[test]
    fn test_slice_display_matches_action_prefix() {
        assert_eq!(Slice::Workouts.to_string(), "workout");
        assert_eq!(Slice::Favorites.to_string(), "favorites");
    }
}
