//! Light/dark theme preference.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::storage::{keys, KeyValueStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!(
                "Invalid theme '{}'. Valid options: light, dark",
                s
            )),
        }
    }
}

/// Reads the saved preference. Anything other than `dark` reads as light;
/// a missing key or a read failure yields `None`.
pub async fn load_theme(store: &dyn KeyValueStore) -> Option<Theme> {
    match store.get(keys::APP_THEME).await {
        Ok(Some(saved)) => Some(if saved == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!("Error loading theme: {}", e);
            None
        }
    }
}

/// Flips the theme and saves it. The new theme is returned even if saving
/// fails.
pub async fn toggle_theme(store: &dyn KeyValueStore, current: Theme) -> Theme {
    let next = current.toggle();
    if let Err(e) = store.set(keys::APP_THEME, next.as_str()).await {
        tracing::warn!("Error saving theme: {}", e);
    }
    next
}
