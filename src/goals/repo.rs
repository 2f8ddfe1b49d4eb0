use sqlx::PgPool;
use time::Date;
use tracing::debug;

use super::repo_types::Goal;
use crate::error::{insert_failed, query_failed, AppResult};

/// Insert a goal with the default `Active` status and return its id.
pub async fn set_goal(
    db: &PgPool,
    user_id: i32,
    description: &str,
    target_value: Option<f64>,
    start_date: Date,
    end_date: Date,
) -> AppResult<i32> {
    let goal_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO goals (user_id, goal_description, target_value, start_date, end_date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING goal_id
        "#,
    )
    .bind(user_id)
    .bind(description)
    .bind(target_value)
    .bind(start_date)
    .bind(end_date)
    .fetch_one(db)
    .await
    .map_err(insert_failed("set_goal", "user"))?;

    debug!(user_id, goal_id, "goal set");
    Ok(goal_id)
}

pub async fn get_user_goals(db: &PgPool, user_id: i32) -> AppResult<Vec<Goal>> {
    sqlx::query_as::<_, Goal>(
        r#"
        SELECT goal_id, goal_description, target_value::float8 AS target_value,
               start_date, end_date, status
          FROM goals
         WHERE user_id = $1
         ORDER BY goal_id
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .map_err(query_failed("get_user_goals"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{make_user, pool_or_skip};
    use crate::error::AppError;
    use time::macros::date;

    #[tokio::test]
    async fn new_goal_is_active_and_listed() {
        let db = pool_or_skip!();
        let user = make_user(&db, "Goalie").await;

        let goal_id = set_goal(
            &db,
            user,
            "Workout 3 times this week",
            Some(3.0),
            date!(2024 - 06 - 10),
            date!(2024 - 06 - 16),
        )
        .await
        .unwrap();

        let goals = get_user_goals(&db, user).await.unwrap();
        assert_eq!(
            goals,
            vec![Goal {
                goal_id,
                goal_description: "Workout 3 times this week".into(),
                target_value: Some(3.0),
                start_date: date!(2024 - 06 - 10),
                end_date: date!(2024 - 06 - 16),
                status: Some("Active".into()),
            }]
        );
    }

    #[tokio::test]
    async fn target_is_optional() {
        let db = pool_or_skip!();
        let user = make_user(&db, "Loose").await;
        set_goal(&db, user, "Feel better", None, date!(2024 - 01 - 01), date!(2024 - 12 - 31))
            .await
            .unwrap();
        let goals = get_user_goals(&db, user).await.unwrap();
        assert_eq!(goals[0].target_value, None);
    }

    #[tokio::test]
    async fn goal_for_unknown_user_is_not_found() {
        let db = pool_or_skip!();
        let err = set_goal(&db, -1, "Ghost", None, date!(2024 - 01 - 01), date!(2024 - 01 - 02))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("user")));
    }
}
