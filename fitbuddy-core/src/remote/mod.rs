//! Remote data adapters.
//!
//! Each adapter wraps one HTTP service and substitutes local data when the
//! call fails, so callers see a value instead of a network error. The one
//! exception is registration, which reports failure.

mod auth;
mod exercises;
mod tips;

use std::time::Duration;

pub use auth::{AuthClient, AuthError};
pub use exercises::{fallback_exercises, ExerciseClient, ExerciseQuery};
pub use tips::{fallback_tips, TipsClient};

pub const DEFAULT_EXERCISE_URL: &str = "https://api.api-ninjas.com/v1/exercises";
pub const DEFAULT_QUOTES_URL: &str = "https://api.api-ninjas.com/v1/quotes";
pub const DEFAULT_AUTH_URL: &str = "https://dummyjson.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the api-ninjas key.
const API_KEY_HEADER: &str = "X-Api-Key";

/// Builds the HTTP client shared by all adapters.
pub fn http_client(timeout: Duration) -> reqwest::Client {
    match reqwest::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("Failed to build HTTP client, using defaults: {}", e);
            reqwest::Client::new()
        }
    }
}
