use serde::Serialize;
use time::Date;

use super::repo::DashboardStats;
use crate::calendar::week_start;
use crate::workouts::repo_types::{Exercise, Workout};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSummary {
    #[serde(with = "crate::calendar::iso_date")]
    pub week_start: Date,
    pub workouts: usize,
    pub minutes: i64,
}

#[derive(Debug, Serialize)]
pub struct LatestWorkout {
    #[serde(flatten)]
    pub workout: Workout,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Serialize)]
pub struct Insights {
    /// False until the first workout is logged; the page shows a prompt instead.
    pub has_workouts: bool,
    pub stats: DashboardStats,
    pub this_week: WeekSummary,
    pub latest: Option<LatestWorkout>,
}

/// Workouts dated from this week's Monday through `today`, the same window
/// the leaderboard uses.
pub fn summarize_week(workouts: &[Workout], today: Date) -> WeekSummary {
    let start = week_start(today);
    let this_week: Vec<&Workout> = workouts
        .iter()
        .filter(|w| (start..=today).contains(&w.workout_date))
        .collect();
    WeekSummary {
        week_start: start,
        workouts: this_week.len(),
        minutes: this_week
            .iter()
            .map(|w| i64::from(w.duration_minutes.unwrap_or(0)))
            .sum(),
    }
}
