use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::{info, instrument};

use super::{
    dto::{CreatedGoalResponse, SetGoalRequest},
    repo,
    repo_types::Goal,
};
use crate::{error::AppError, extractors::CurrentUser, state::AppState};

pub fn goal_routes() -> Router<AppState> {
    Router::new().route("/goals", get(list_goals).post(create_goal))
}

#[instrument(skip(state, payload))]
pub async fn create_goal(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<SetGoalRequest>,
) -> Result<(StatusCode, Json<CreatedGoalResponse>), AppError> {
    let req = payload.validated()?;
    let goal_id = repo::set_goal(
        &state.db,
        user_id,
        &req.description,
        req.target_value,
        req.start_date,
        req.end_date,
    )
    .await?;
    info!(user_id, goal_id, "goal set");
    Ok((StatusCode::CREATED, Json(CreatedGoalResponse { goal_id })))
}

#[instrument(skip(state))]
pub async fn list_goals(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<Goal>>, AppError> {
    Ok(Json(repo::get_user_goals(&state.db, user_id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{make_user, pool_or_skip};
    use time::macros::date;

    #[tokio::test]
    async fn blank_description_is_rejected_without_db() {
        let err = create_goal(
            State(AppState::fake()),
            CurrentUser(1),
            Json(SetGoalRequest {
                description: "  ".into(),
                target_value: None,
                start_date: date!(2024 - 06 - 01),
                end_date: date!(2024 - 06 - 30),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_then_list() {
        let db = pool_or_skip!();
        let user_id = make_user(&db, "Planner").await;
        let state = AppState::from_parts(db, AppState::fake().config);

        let (status, Json(created)) = create_goal(
            State(state.clone()),
            CurrentUser(user_id),
            Json(SetGoalRequest {
                description: "Deadlift 150kg".into(),
                target_value: Some(150.0),
                start_date: date!(2024 - 06 - 01),
                end_date: date!(2024 - 09 - 01),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(goals) = list_goals(State(state), CurrentUser(user_id)).await.unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].goal_id, created.goal_id);
        assert_eq!(goals[0].status.as_deref(), Some("Active"));
    }
}
