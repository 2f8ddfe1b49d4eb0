use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{CreatedUserResponse, ProfileRequest, ProfileResponse},
    repo,
    repo_types::UserSummary,
    services::validate_profile,
};
use crate::{error::AppError, extractors::CurrentUser, state::AppState};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_users).post(create_user))
}

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, AppError> {
    Ok(Json(repo::get_all_users(&state.db).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<ProfileRequest>,
) -> Result<(StatusCode, HeaderMap, Json<CreatedUserResponse>), AppError> {
    let profile = validate_profile(payload)?;
    let user_id = repo::add_user(
        &state.db,
        &profile.name,
        &profile.email,
        profile.weight_kg,
        profile.height_cm,
    )
    .await?;

    info!(user_id, email = %profile.email, "user created");
    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("/api/v1/users/{user_id}")) {
        headers.insert(header::LOCATION, location);
    }
    Ok((StatusCode::CREATED, headers, Json(CreatedUserResponse { user_id })))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = repo::get_user_profile(&state.db, user_id)
        .await?
        .ok_or(AppError::NotFound("user"))?;
    Ok(Json(ProfileResponse { user_id, profile }))
}

/// Write the edited profile, then read it back so the page shows stored values.
#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<ProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = validate_profile(payload)?;
    repo::update_user_profile(&state.db, user_id, &profile).await?;
    info!(user_id, "profile updated");

    let profile = repo::get_user_profile(&state.db, user_id)
        .await?
        .ok_or(AppError::NotFound("user"))?;
    Ok(Json(ProfileResponse { user_id, profile }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{pool_or_skip, unique_email};
    use crate::users::repo_types::UserProfile;

    #[test]
    fn profile_response_flattens_fields() {
        let response = ProfileResponse {
            user_id: 1,
            profile: UserProfile {
                name: "Alice".into(),
                email: "alice@email.com".into(),
                weight_kg: Some(60.5),
                height_cm: None,
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["user_id"], 1);
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["weight_kg"], 60.5);
        assert!(json["height_cm"].is_null());
    }

    #[tokio::test]
    async fn create_user_rejects_invalid_email_before_touching_db() {
        let state = AppState::fake();
        let err = create_user(
            State(state),
            Json(ProfileRequest {
                name: "Alice".into(),
                email: "nope".into(),
                weight_kg: None,
                height_cm: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_user_rejects_oversized_weight_before_touching_db() {
        let err = create_user(
            State(AppState::fake()),
            Json(ProfileRequest {
                name: "Giant".into(),
                email: "giant@email.com".into(),
                weight_kg: Some(1000.0),
                height_cm: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn profile_round_trip_through_handlers() {
        let db = pool_or_skip!();
        let user_id = repo::add_user(&db, "Alice", &unique_email("alice"), Some(60.5), Some(165.0))
            .await
            .unwrap();
        let state = AppState::fake();
        let mut config = (*state.config).clone();
        config.current_user_id = user_id;
        let state = AppState::from_parts(db, std::sync::Arc::new(config));

        let Json(before) = get_profile(State(state.clone()), CurrentUser(user_id))
            .await
            .unwrap();
        assert_eq!(before.profile.name, "Alice");

        let new_email = unique_email("alicia");
        let Json(after) = update_profile(
            State(state),
            CurrentUser(user_id),
            Json(ProfileRequest {
                name: "Alicia".into(),
                email: new_email.clone(),
                weight_kg: Some(61.0),
                height_cm: Some(165.0),
            }),
        )
        .await
        .unwrap();
        assert_eq!(after.profile.name, "Alicia");
        assert_eq!(after.profile.email, new_email);
        assert_eq!(after.profile.weight_kg, Some(61.0));
    }
}
