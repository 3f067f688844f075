mod exercise;
mod tip;
mod user;
mod workout_log;

pub use exercise::Exercise;
pub use tip::Tip;
pub use user::{AuthSession, Credentials, Registration, User};
pub use workout_log::WorkoutLog;
