use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::day::is_today;

/// Daily goal in ml before the user changes it.
pub const DEFAULT_WATER_GOAL: u32 = 2500;

/// Amount added by one tap of the "glass" button, in ml.
pub const GLASS_ML: u32 = 250;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaterAction {
    /// Adds ml, capped at twice the goal.
    AddWater(u32),
    /// Sets the intake directly, capped at twice the goal.
    SetWaterIntake(u32),
    ResetWater,
    /// Replaces the goal only; intake is not re-clamped.
    SetWaterGoal(u32),
    /// Restores a persisted record, applying the daily rollover.
    LoadWaterData(WaterRecord),
}

/// Persisted shape of the water slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterRecord {
    pub amount: u32,
    pub date: NaiveDate,
}

/// Water intake for the current day, in ml.
///
/// `intake` never exceeds `2 * goal` after an add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterState {
    pub intake: u32,
    pub goal: u32,
    pub last_updated: NaiveDate,
}

impl WaterState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            intake: 0,
            goal: DEFAULT_WATER_GOAL,
            last_updated: today,
        }
    }

    pub fn reduce(mut self, action: WaterAction, today: NaiveDate) -> Self {
        match action {
            WaterAction::AddWater(amount) => {
                self.intake = self.intake.saturating_add(amount).min(self.cap());
                self.last_updated = today;
            }
            WaterAction::SetWaterIntake(amount) => {
                self.intake = amount.min(self.cap());
                self.last_updated = today;
            }
            WaterAction::ResetWater => {
                self.intake = 0;
                self.last_updated = today;
            }
            WaterAction::SetWaterGoal(goal) => {
                self.goal = goal;
            }
            WaterAction::LoadWaterData(record) => {
                if is_today(record.date, today) {
                    self.intake = record.amount;
                    self.last_updated = record.date;
                } else {
                    self.intake = 0;
                    self.last_updated = today;
                }
            }
        }
        self
    }

    /// Progress toward the goal, 0 to 100.
    pub fn progress_percent(&self) -> u32 {
        if self.goal == 0 {
            return 100;
        }
        let percent = u64::from(self.intake) * 100 / u64::from(self.goal);
        percent.min(100) as u32
    }

    pub fn record(&self) -> WaterRecord {
        WaterRecord {
            amount: self.intake,
            date: self.last_updated,
        }
    }

    fn cap(&self) -> u32 {
        self.goal.saturating_mul(2)
    }
}
