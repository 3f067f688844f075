use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::exercise::Exercise;

/// A logged training event.
///
/// Exercise fields are copied by value; there is no link back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    pub id: String,
    pub exercise_name: String,
    #[serde(default)]
    pub exercise_type: String,
    #[serde(default)]
    pub muscle: String,
    #[serde(default)]
    pub difficulty: String,
    pub date: DateTime<Utc>,
    pub sets: u32,
    pub reps: u32,
    /// Weight in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Duration in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutLog {
    pub fn new(exercise_name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            exercise_name: exercise_name.into(),
            exercise_type: String::new(),
            muscle: String::new(),
            difficulty: String::new(),
            date: Utc::now(),
            sets,
            reps,
            weight: None,
            duration: None,
            notes: None,
        }
    }

    /// Snapshots the exercise's descriptive fields into a new log entry.
    pub fn from_exercise(exercise: &Exercise, sets: u32, reps: u32) -> Self {
        let mut log = Self::new(exercise.name.clone(), sets, reps);
        log.exercise_type = exercise.exercise_type.clone();
        log.muscle = exercise.muscle.clone();
        log.difficulty = exercise.difficulty.clone();
        log
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl fmt::Display for WorkoutLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} x {}", self.exercise_name, self.sets, self.reps)?;
        if let Some(weight) = self.weight {
            write!(f, " @ {}kg", weight)?;
        }
        if let Some(duration) = self.duration {
            write!(f, " ({} min)", duration)?;
        }
        Ok(())
    }
}
