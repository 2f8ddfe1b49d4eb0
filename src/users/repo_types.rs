use serde::Serialize;
use sqlx::FromRow;

/// Row of the user directory.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct UserSummary {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

/// Editable profile fields. Numerics come back as float8.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}
