use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{LoggedWorkoutResponse, WorkoutDraft},
    repo,
    repo_types::{Exercise, Workout},
};
use crate::{calendar, error::AppError, extractors::CurrentUser, state::AppState};

pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", get(list_workouts).post(submit_workout))
        .route("/workouts/:id", get(workout_details))
        .route("/workouts/draft", post(new_draft))
        .route("/workouts/draft/exercises", post(add_draft_exercise))
}

pub async fn new_draft() -> Json<WorkoutDraft> {
    Json(WorkoutDraft::new(calendar::today()))
}

/// "Add another exercise": echo the draft back with one more blank row.
pub async fn add_draft_exercise(Json(draft): Json<WorkoutDraft>) -> Json<WorkoutDraft> {
    Json(draft.with_blank_exercise())
}

#[instrument(skip(state, draft))]
pub async fn submit_workout(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(draft): Json<WorkoutDraft>,
) -> Result<(StatusCode, HeaderMap, Json<LoggedWorkoutResponse>), AppError> {
    let submission = draft.into_submission()?;
    let workout_id = repo::log_workout(
        &state.db,
        user_id,
        submission.workout_date,
        submission.duration_minutes,
        submission.calories_burned,
        &submission.exercises,
    )
    .await?;

    info!(user_id, workout_id, "workout logged");
    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/v1/workouts/{workout_id}")) {
        headers.insert(header::LOCATION, location);
    }
    Ok((
        StatusCode::CREATED,
        headers,
        Json(LoggedWorkoutResponse {
            workout_id,
            exercises_logged: submission.exercises.len(),
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_workouts(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<Workout>>, AppError> {
    Ok(Json(repo::get_user_workouts(&state.db, user_id).await?))
}

#[instrument(skip(state))]
pub async fn workout_details(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Exercise>>, AppError> {
    if !repo::is_workout_owner(&state.db, user_id, id).await? {
        return Err(AppError::NotFound("workout"));
    }
    Ok(Json(repo::get_workout_details(&state.db, id).await?))
}
