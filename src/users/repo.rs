use sqlx::PgPool;
use tracing::debug;

use super::repo_types::{UserProfile, UserSummary};
use crate::error::{query_failed, write_failed, AppError, AppResult};

const DUPLICATE_EMAIL: &str = "email already registered";

/// Insert a user and return the generated id.
pub async fn add_user(
    db: &PgPool,
    name: &str,
    email: &str,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
) -> AppResult<i32> {
    let user_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO users (name, email, weight_kg, height_cm)
        VALUES ($1, $2, $3, $4)
        RETURNING user_id
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(weight_kg)
    .bind(height_cm)
    .fetch_one(db)
    .await
    .map_err(write_failed("add_user", DUPLICATE_EMAIL, "user"))?;

    debug!(user_id, "user added");
    Ok(user_id)
}

pub async fn get_all_users(db: &PgPool) -> AppResult<Vec<UserSummary>> {
    sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT user_id, name, email
          FROM users
         ORDER BY name
        "#,
    )
    .fetch_all(db)
    .await
    .map_err(query_failed("get_all_users"))
}

/// `Ok(None)` when no user has this id.
pub async fn get_user_profile(db: &PgPool, user_id: i32) -> AppResult<Option<UserProfile>> {
    sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT name, email, weight_kg::float8 AS weight_kg, height_cm::float8 AS height_cm
          FROM users
         WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .map_err(query_failed("get_user_profile"))
}

/// Overwrite every profile field. Last write wins.
pub async fn update_user_profile(
    db: &PgPool,
    user_id: i32,
    profile: &UserProfile,
) -> AppResult<()> {
    let result = sqlx::query(
        r#"
        UPDATE users
           SET name = $1, email = $2, weight_kg = $3, height_cm = $4
         WHERE user_id = $5
        "#,
    )
    .bind(&profile.name)
    .bind(&profile.email)
    .bind(profile.weight_kg)
    .bind(profile.height_cm)
    .bind(user_id)
    .execute(db)
    .await
    .map_err(write_failed("update_user_profile", DUPLICATE_EMAIL, "user"))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("user"));
    }
    debug!(user_id, "profile updated");
    Ok(())
}
