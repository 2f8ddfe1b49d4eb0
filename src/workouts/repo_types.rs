use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::Date;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Workout {
    pub workout_id: i32,
    #[serde(with = "crate::calendar::iso_date")]
    pub workout_date: Date,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
}

/// One logged movement, as shown in the history breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Exercise {
    pub exercise_name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight_kg: Option<f64>,
}

/// Exercise row to insert alongside a new workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExercise {
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight_kg: f64,
}
