use sqlx::{PgPool, Postgres, Transaction};
use time::Date;
use tracing::debug;

use super::repo_types::{Exercise, NewExercise, Workout};
use crate::error::{insert_failed, query_failed, AppResult};

/// Insert a workout and all of its exercises in one transaction.
///
/// Either every row persists or none does; the transaction rolls back on drop
/// when any insert fails.
pub async fn log_workout(
    db: &PgPool,
    user_id: i32,
    workout_date: Date,
    duration_minutes: i32,
    calories_burned: Option<i32>,
    exercises: &[NewExercise],
) -> AppResult<i32> {
    let mut tx = db.begin().await.map_err(query_failed("log_workout begin"))?;

    let workout_id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO workouts (user_id, workout_date, duration_minutes, calories_burned)
        VALUES ($1, $2, $3, $4)
        RETURNING workout_id
        "#,
    )
    .bind(user_id)
    .bind(workout_date)
    .bind(duration_minutes)
    .bind(calories_burned)
    .fetch_one(&mut *tx)
    .await
    .map_err(insert_failed("log_workout", "user"))?;

    for ex in exercises {
        insert_exercise_tx(&mut tx, workout_id, ex)
            .await
            .map_err(insert_failed("log_workout exercise", "workout"))?;
    }

    tx.commit()
        .await
        .map_err(query_failed("log_workout commit"))?;

    debug!(user_id, workout_id, exercises = exercises.len(), "workout logged");
    Ok(workout_id)
}

async fn insert_exercise_tx(
    tx: &mut Transaction<'_, Postgres>,
    workout_id: i32,
    ex: &NewExercise,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO exercises (workout_id, exercise_name, sets, reps, weight_kg)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(workout_id)
    .bind(&ex.name)
    .bind(ex.sets)
    .bind(ex.reps)
    .bind(ex.weight_kg)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

/// Newest first.
pub async fn get_user_workouts(db: &PgPool, user_id: i32) -> AppResult<Vec<Workout>> {
    sqlx::query_as::<_, Workout>(
        r#"
        SELECT workout_id, workout_date, duration_minutes, calories_burned
          FROM workouts
         WHERE user_id = $1
         ORDER BY workout_date DESC, workout_id DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .map_err(query_failed("get_user_workouts"))
}

/// Whether `workout_id` was logged by `user_id`.
pub async fn is_workout_owner(db: &PgPool, user_id: i32, workout_id: i32) -> AppResult<bool> {
    sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM workouts WHERE workout_id = $1 AND user_id = $2)",
    )
    .bind(workout_id)
    .bind(user_id)
    .fetch_one(db)
    .await
    .map_err(query_failed("is_workout_owner"))
}

pub async fn get_workout_details(db: &PgPool, workout_id: i32) -> AppResult<Vec<Exercise>> {
    sqlx::query_as::<_, Exercise>(
        r#"
        SELECT exercise_name, sets, reps, weight_kg::float8 AS weight_kg
          FROM exercises
         WHERE workout_id = $1
         ORDER BY exercise_id
        "#,
    )
    .bind(workout_id)
    .fetch_all(db)
    .await
    .map_err(query_failed("get_workout_details"))
}
