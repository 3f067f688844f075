use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog entry from the exercise source.
///
/// `name` is the only key; favorites are deduplicated by it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exercise {
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: String,
    pub muscle: String,
    pub equipment: String,
    pub difficulty: String,
    pub instructions: String,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_type(mut self, exercise_type: impl Into<String>) -> Self {
        self.exercise_type = exercise_type.into();
        self
    }

    pub fn with_muscle(mut self, muscle: impl Into<String>) -> Self {
        self.muscle = muscle.into();
        self
    }

    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment = equipment.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.len().max(10)))?;
        writeln!(f, "Type:       {}", self.exercise_type)?;
        writeln!(f, "Muscle:     {}", self.muscle)?;
        writeln!(f, "Equipment:  {}", self.equipment)?;
        writeln!(f, "Difficulty: {}", self.difficulty)?;

        if !self.instructions.is_empty() {
            writeln!(f, "\nInstructions:\n{}", self.instructions)?;
        }

        Ok(())
    }
}
