use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::day::day_of;
use crate::models::WorkoutLog;

#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutAction {
    /// Inserts at the front; the collection is kept newest-first.
    LogWorkout(WorkoutLog),
    DeleteWorkout(String),
    /// Full replace, used during hydration.
    SetWorkouts(Vec<WorkoutLog>),
    ClearWorkouts,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutsState {
    pub workouts: Vec<WorkoutLog>,
}

impl WorkoutsState {
    pub fn reduce(mut self, action: WorkoutAction) -> Self {
        match action {
            WorkoutAction::LogWorkout(entry) => {
                self.workouts.insert(0, entry);
            }
            WorkoutAction::DeleteWorkout(id) => {
                self.workouts.retain(|w| w.id != id);
            }
            WorkoutAction::SetWorkouts(workouts) => {
                self.workouts = workouts;
            }
            WorkoutAction::ClearWorkouts => {
                self.workouts.clear();
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Workouts grouped by calendar day in `tz`, most recent day first.
    /// Within a day, logs keep collection order.
    pub fn grouped_by_day<Tz: TimeZone>(&self, tz: &Tz) -> Vec<(NaiveDate, Vec<&WorkoutLog>)> {
        let mut groups: Vec<(NaiveDate, Vec<&WorkoutLog>)> = Vec::new();

        for workout in &self.workouts {
            let day = day_of(&workout.date, tz);
            match groups.iter_mut().find(|(d, _)| *d == day) {
                Some((_, logs)) => logs.push(workout),
                None => groups.push((day, vec![workout])),
            }
        }

        groups.sort_by(|a, b| b.0.cmp(&a.0));
        groups
    }

    pub fn count_since(&self, cutoff: DateTime<Utc>) -> usize {
        self.workouts.iter().filter(|w| w.date >= cutoff).count()
    }

    /// Workouts logged in the seven days before `now`.
    pub fn this_week(&self, now: DateTime<Utc>) -> usize {
        self.count_since(now - Duration::days(7))
    }
}
