use time::Date;

use super::{
    dto::{ExerciseEntry, WorkoutDraft},
    repo_types::NewExercise,
};
use crate::error::{AppError, AppResult};
use crate::validation::{measurement, MAX_LIFT_KG};

const MAX_EXERCISE_NAME: usize = 255;

/// A draft that passed validation and is ready for `repo::log_workout`.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSubmission {
    pub workout_date: Date,
    pub duration_minutes: i32,
    pub calories_burned: Option<i32>,
    pub exercises: Vec<NewExercise>,
}

impl WorkoutDraft {
    /// Fresh form: one blank exercise row, minimum duration.
    pub fn new(workout_date: Date) -> Self {
        Self {
            workout_date,
            duration_minutes: 1,
            calories_burned: Some(0),
            exercises: vec![ExerciseEntry::default()],
        }
    }

    pub fn with_blank_exercise(mut self) -> Self {
        self.exercises.push(ExerciseEntry::default());
        self
    }

    /// Drop rows with a blank name and check what remains.
    pub fn into_submission(self) -> AppResult<WorkoutSubmission> {
        if self.duration_minutes < 1 {
            return Err(AppError::validation("duration must be at least 1 minute"));
        }
        if matches!(self.calories_burned, Some(c) if c < 0) {
            return Err(AppError::validation("calories must not be negative"));
        }

        let mut exercises = Vec::with_capacity(self.exercises.len());
        for entry in self.exercises {
            let name = entry.name.trim();
            if name.is_empty() {
                continue;
            }
            if name.chars().count() > MAX_EXERCISE_NAME {
                return Err(AppError::validation(format!(
                    "exercise name longer than {MAX_EXERCISE_NAME} characters"
                )));
            }
            if entry.sets < 1 || entry.reps < 1 {
                return Err(AppError::validation(format!(
                    "{name}: sets and reps must be at least 1"
                )));
            }
            measurement("weight_kg", Some(entry.weight_kg), MAX_LIFT_KG)
                .map_err(|e| AppError::validation(format!("{name}: {e}")))?;
            exercises.push(NewExercise {
                name: name.to_string(),
                sets: entry.sets,
                reps: entry.reps,
                weight_kg: entry.weight_kg,
            });
        }

        if exercises.is_empty() {
            return Err(AppError::validation(
                "add at least one exercise with a name",
            ));
        }

        Ok(WorkoutSubmission {
            workout_date: self.workout_date,
            duration_minutes: self.duration_minutes,
            calories_burned: self.calories_burned,
            exercises,
        })
    }
}
