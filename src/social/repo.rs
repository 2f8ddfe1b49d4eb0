use sqlx::{PgPool, Postgres, Transaction};
use time::Date;
use tracing::debug;

use super::repo_types::{Friend, LeaderboardRow};
use crate::calendar::week_start;
use crate::error::{query_failed, write_failed, AppError, AppResult};

const ALREADY_FRIENDS: &str = "already friends";

/// Store the friendship as two directed rows, both or neither.
pub async fn add_friend(db: &PgPool, user_id: i32, friend_id: i32) -> AppResult<()> {
    if user_id == friend_id {
        return Err(AppError::validation("cannot add yourself as a friend"));
    }

    let mut tx = db.begin().await.map_err(query_failed("add_friend begin"))?;
    insert_edge_tx(&mut tx, user_id, friend_id)
        .await
        .map_err(write_failed("add_friend", ALREADY_FRIENDS, "user"))?;
    insert_edge_tx(&mut tx, friend_id, user_id)
        .await
        .map_err(write_failed("add_friend", ALREADY_FRIENDS, "user"))?;
    tx.commit().await.map_err(query_failed("add_friend commit"))?;

    debug!(user_id, friend_id, "friendship added");
    Ok(())
}

async fn insert_edge_tx(
    tx: &mut Transaction<'_, Postgres>,
    from: i32,
    to: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO friends (user_id_1, user_id_2) VALUES ($1, $2)")
        .bind(from)
        .bind(to)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Delete both directed rows. Returns how many rows went away (0 or 2).
pub async fn remove_friend(db: &PgPool, user_id: i32, friend_id: i32) -> AppResult<u64> {
    let mut tx = db.begin().await.map_err(query_failed("remove_friend begin"))?;
    let mut removed = 0;
    for (from, to) in [(user_id, friend_id), (friend_id, user_id)] {
        removed += sqlx::query("DELETE FROM friends WHERE user_id_1 = $1 AND user_id_2 = $2")
            .bind(from)
            .bind(to)
            .execute(&mut *tx)
            .await
            .map_err(query_failed("remove_friend"))?
            .rows_affected();
    }
    tx.commit().await.map_err(query_failed("remove_friend commit"))?;

    debug!(user_id, friend_id, removed, "friendship removed");
    Ok(removed)
}

/// Friends of `user_id`, ordered by name.
pub async fn get_user_friends(db: &PgPool, user_id: i32) -> AppResult<Vec<Friend>> {
    sqlx::query_as::<_, Friend>(
        r#"
        SELECT u.user_id, u.name
          FROM users u
          JOIN friends f ON u.user_id = f.user_id_2
         WHERE f.user_id_1 = $1
         ORDER BY u.name
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .map_err(query_failed("get_user_friends"))
}

/// Minutes per person for the user and their friends, counting workouts dated
/// from the Monday of `today`'s week through `today`. Highest first.
pub async fn get_weekly_leaderboard(
    db: &PgPool,
    user_id: i32,
    today: Date,
) -> AppResult<Vec<LeaderboardRow>> {
    sqlx::query_as::<_, LeaderboardRow>(
        r#"
        SELECT u.user_id, u.name,
               COALESCE(SUM(w.duration_minutes), 0)::int8 AS total_minutes
          FROM users u
          JOIN workouts w ON w.user_id = u.user_id
         WHERE (u.user_id = $1
                OR u.user_id IN (SELECT user_id_2 FROM friends WHERE user_id_1 = $1))
           AND w.workout_date >= $2
           AND w.workout_date <= $3
         GROUP BY u.user_id, u.name
         ORDER BY total_minutes DESC, u.name
        "#,
    )
    .bind(user_id)
    .bind(week_start(today))
    .bind(today)
    .fetch_all(db)
    .await
    .map_err(query_failed("get_weekly_leaderboard"))
}
