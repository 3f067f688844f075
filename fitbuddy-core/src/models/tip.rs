use serde::{Deserialize, Serialize};
use std::fmt;

/// A short fitness tip shown on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub tip: String,
    pub category: String,
}

impl Tip {
    pub fn new(tip: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            tip: tip.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.tip)
    }
}
