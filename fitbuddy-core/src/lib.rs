//! FitBuddy Core Library
//!
//! State slices, persistence and remote data adapters shared by FitBuddy
//! front ends.

pub mod day;
pub mod models;
pub mod persist;
pub mod remote;
pub mod slices;
pub mod storage;
pub mod store;
pub mod theme;
pub mod validation;

pub use day::{Clock, FixedClock, SystemClock};
pub use models::{AuthSession, Credentials, Exercise, Registration, Tip, User, WorkoutLog};
pub use persist::{PersistRule, Synchronizer};
pub use remote::{AuthClient, AuthError, ExerciseClient, ExerciseQuery, TipsClient};
pub use slices::{Action, AppState, Slice};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SecureStorage, StorageError};
pub use store::Store;
pub use theme::Theme;
pub use validation::FieldErrors;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
