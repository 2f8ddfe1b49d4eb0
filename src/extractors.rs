use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

use crate::state::AppState;

/// The user every page acts as. There is no login; the id comes from config.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub i32);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(state.config.current_user_id))
    }
}
