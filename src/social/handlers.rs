use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{AddFriendRequest, LeaderboardEntry},
    repo,
    repo_types::Friend,
    services::{friend_candidates, rank},
};
use crate::{
    calendar, error::AppError, extractors::CurrentUser, state::AppState,
    users::{repo as users_repo, repo_types::UserSummary},
};

pub fn friend_routes() -> Router<AppState> {
    Router::new()
        .route("/friends", get(list_friends).post(add_friend))
        .route("/friends/candidates", get(list_candidates))
        .route("/friends/:id", delete(remove_friend))
}

pub fn leaderboard_routes() -> Router<AppState> {
    Router::new().route("/leaderboard", get(weekly_leaderboard))
}

#[instrument(skip(state))]
pub async fn list_friends(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<Friend>>, AppError> {
    Ok(Json(repo::get_user_friends(&state.db, user_id).await?))
}

/// Add the friendship and return the refreshed friend list.
#[instrument(skip(state))]
pub async fn add_friend(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<AddFriendRequest>,
) -> Result<(StatusCode, Json<Vec<Friend>>), AppError> {
    repo::add_friend(&state.db, user_id, payload.friend_id).await?;
    info!(user_id, friend_id = payload.friend_id, "friend added");
    let friends = repo::get_user_friends(&state.db, user_id).await?;
    Ok((StatusCode::CREATED, Json(friends)))
}

#[instrument(skip(state))]
pub async fn remove_friend(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(friend_id): Path<i32>,
) -> Result<Json<Vec<Friend>>, AppError> {
    if repo::remove_friend(&state.db, user_id, friend_id).await? == 0 {
        return Err(AppError::NotFound("friendship"));
    }
    info!(user_id, friend_id, "friend removed");
    Ok(Json(repo::get_user_friends(&state.db, user_id).await?))
}

#[instrument(skip(state))]
pub async fn list_candidates(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    let friends = repo::get_user_friends(&state.db, user_id).await?;
    let all = users_repo::get_all_users(&state.db).await?;
    Ok(Json(friend_candidates(user_id, all, &friends)))
}

#[instrument(skip(state))]
pub async fn weekly_leaderboard(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let rows = repo::get_weekly_leaderboard(&state.db, user_id, calendar::today()).await?;
    Ok(Json(rank(rows)))
}
