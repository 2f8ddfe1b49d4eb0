use serde::{Deserialize, Serialize};

use super::repo_types::UserProfile;

/// Body for both creating a user and editing the profile.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedUserResponse {
    pub user_id: i32,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: i32,
    #[serde(flatten)]
    pub profile: UserProfile,
}
