use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use super::{
    repo,
    services::{summarize_week, Insights, LatestWorkout},
};
use crate::{
    calendar, error::AppError, extractors::CurrentUser, state::AppState,
    workouts::repo as workouts_repo,
};

pub fn insight_routes() -> Router<AppState> {
    Router::new().route("/insights", get(get_insights))
}

#[instrument(skip(state))]
pub async fn get_insights(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Insights>, AppError> {
    let stats = repo::get_dashboard_stats(&state.db, user_id).await?;
    let workouts = workouts_repo::get_user_workouts(&state.db, user_id).await?;
    let this_week = summarize_week(&workouts, calendar::today());

    let latest = match workouts.into_iter().next() {
        Some(workout) => {
            let exercises = workouts_repo::get_workout_details(&state.db, workout.workout_id).await?;
            Some(LatestWorkout { workout, exercises })
        }
        None => None,
    };

    Ok(Json(Insights {
        has_workouts: stats.total_workouts > 0,
        stats,
        this_week,
        latest,
    }))
}
