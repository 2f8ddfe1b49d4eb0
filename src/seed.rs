use sqlx::PgPool;
use time::{Date, Duration};
use tracing::info;

use crate::calendar::week_start;
use crate::error::AppResult;
use crate::goals::repo as goals_repo;
use crate::social::repo as social_repo;
use crate::users::repo as users_repo;
use crate::workouts::{repo as workouts_repo, repo_types::NewExercise};

fn one(name: &str, sets: i32, reps: i32, weight_kg: f64) -> [NewExercise; 1] {
    [NewExercise {
        name: name.into(),
        sets,
        reps,
        weight_kg,
    }]
}

/// Populate an empty database with demo users. Returns false when users exist.
pub async fn seed_demo_data(db: &PgPool, today: Date) -> AppResult<bool> {
    if !users_repo::get_all_users(db).await?.is_empty() {
        return Ok(false);
    }
    info!("seeding demo data");

    let alice = users_repo::add_user(db, "Alice", "alice@email.com", Some(60.5), Some(165.0)).await?;
    let bob = users_repo::add_user(db, "Bob", "bob@email.com", Some(85.0), Some(180.0)).await?;
    let charlie =
        users_repo::add_user(db, "Charlie", "charlie@email.com", Some(72.3), Some(175.0)).await?;

    social_repo::add_friend(db, alice, bob).await?;
    social_repo::add_friend(db, alice, charlie).await?;

    let day = |n: i64| today - Duration::days(n);
    workouts_repo::log_workout(db, alice, day(1), 60, Some(300), &one("Squat", 3, 10, 50.0)).await?;
    workouts_repo::log_workout(db, alice, day(3), 45, Some(250), &one("Bench Press", 3, 8, 60.0))
        .await?;
    workouts_repo::log_workout(db, bob, day(2), 90, Some(500), &one("Deadlift", 5, 5, 120.0)).await?;
    workouts_repo::log_workout(db, charlie, today, 75, Some(400), &one("Running", 1, 1, 0.0)).await?;

    let monday = week_start(today);
    goals_repo::set_goal(
        db,
        alice,
        "Workout 3 times this week",
        Some(3.0),
        monday,
        monday + Duration::days(6),
    )
    .await?;

    info!(users = 3, workouts = 4, "seeding complete");
    Ok(true)
}
