use tracing::warn;

use super::{dto::ProfileRequest, repo_types::UserProfile};
use crate::error::{AppError, AppResult};
use crate::validation::{is_valid_email, measurement, non_empty, MAX_BODY_MEASURE};

/// Normalise and check a submitted profile before it reaches the database.
pub fn validate_profile(req: ProfileRequest) -> AppResult<UserProfile> {
    let name = non_empty("name", &req.name)?;
    let email = req.email.trim().to_lowercase();
    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(AppError::validation("invalid email"));
    }
    Ok(UserProfile {
        name,
        email,
        weight_kg: measurement("weight_kg", req.weight_kg, MAX_BODY_MEASURE)?,
        height_cm: measurement("height_cm", req.height_cm, MAX_BODY_MEASURE)?,
    })
}
