use serde::{Deserialize, Serialize};
use time::Date;

/// One row of the exercise form while a workout is being composed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    #[serde(default)]
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight_kg: f64,
}

impl Default for ExerciseEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            sets: 3,
            reps: 10,
            weight_kg: 20.0,
        }
    }
}

/// The in-progress workout on the log page. The client carries it between
/// interactions; the server never stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDraft {
    #[serde(with = "crate::calendar::iso_date")]
    pub workout_date: Date,
    pub duration_minutes: i32,
    #[serde(default)]
    pub calories_burned: Option<i32>,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

#[derive(Debug, Serialize)]
pub struct LoggedWorkoutResponse {
    pub workout_id: i32,
    pub exercises_logged: usize,
}
