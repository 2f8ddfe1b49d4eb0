use serde::Serialize;
use sqlx::{FromRow, PgPool};

use crate::error::{query_failed, AppResult};

/// Aggregates over every workout the user logged. All zero when there are none.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DashboardStats {
    pub total_workouts: i64,
    pub total_minutes: i64,
    pub avg_duration: f64,
    pub max_duration: i64,
    pub min_duration: i64,
}

pub async fn get_dashboard_stats(db: &PgPool, user_id: i32) -> AppResult<DashboardStats> {
    sqlx::query_as::<_, DashboardStats>(
        r#"
        SELECT COUNT(*)::int8                              AS total_workouts,
               COALESCE(SUM(duration_minutes), 0)::int8    AS total_minutes,
               COALESCE(AVG(duration_minutes), 0)::float8  AS avg_duration,
               COALESCE(MAX(duration_minutes), 0)::int8    AS max_duration,
               COALESCE(MIN(duration_minutes), 0)::int8    AS min_duration
          FROM workouts
         WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(db)
    .await
    .map_err(query_failed("get_dashboard_stats"))
}
