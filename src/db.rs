use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::AppConfig;

const SCHEMA_LOCK_KEY: i64 = 0x0F17_7AC4;

const SCHEMA: [&str; 5] = [
    r#"
    CREATE TABLE IF NOT EXISTS users (
        user_id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        email VARCHAR(255) UNIQUE NOT NULL,
        weight_kg NUMERIC(5, 2),
        height_cm NUMERIC(5, 2),
        created_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS friends (
        user_id_1 INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
        user_id_2 INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
        PRIMARY KEY (user_id_1, user_id_2),
        CONSTRAINT friends_no_self_edge CHECK (user_id_1 <> user_id_2)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS workouts (
        workout_id SERIAL PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
        workout_date DATE NOT NULL,
        duration_minutes INTEGER,
        calories_burned INTEGER,
        created_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS exercises (
        exercise_id SERIAL PRIMARY KEY,
        workout_id INTEGER NOT NULL REFERENCES workouts(workout_id) ON DELETE CASCADE,
        exercise_name VARCHAR(255) NOT NULL,
        sets INTEGER,
        reps INTEGER,
        weight_kg NUMERIC(6, 2)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS goals (
        goal_id SERIAL PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users(user_id) ON DELETE CASCADE,
        goal_description TEXT NOT NULL,
        target_value NUMERIC,
        start_date DATE NOT NULL,
        end_date DATE NOT NULL,
        status VARCHAR(50) DEFAULT 'Active'
    )
    "#,
];

pub async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context("connect to database")
}

/// Create every table that does not exist yet. Safe to run on each start.
pub async fn ensure_schema(db: &PgPool) -> anyhow::Result<()> {
    let mut tx = db.begin().await.context("begin schema tx")?;
    // concurrent CREATE TABLE IF NOT EXISTS can still race on the catalog
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await
        .context("lock schema")?;
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .context("create table")?;
    }
    tx.commit().await.context("commit schema tx")?;
    info!(tables = SCHEMA.len(), "schema ready");
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::str::FromStr;
    use std::sync::atomic::{AtomicU64, Ordering};

    use sqlx::{
        postgres::{PgConnectOptions, PgPoolOptions},
        Executor, PgPool,
    };
    use time::OffsetDateTime;

    use crate::users::repo;

    /// Bind a test pool or return early when no database is configured.
    macro_rules! pool_or_skip {
        () => {
            match $crate::db::test_support::test_pool().await {
                Some(db) => db,
                None => {
                    eprintln!("TEST_DATABASE_URL not set; skipping");
                    return;
                }
            }
        };
    }
    pub(crate) use pool_or_skip;

    /// Pool against `TEST_DATABASE_URL`, or `None` so the caller can skip.
    pub async fn test_pool() -> Option<PgPool> {
        let url = std::env::var("TEST_DATABASE_URL").ok()?;
        let db = PgPoolOptions::new()
            .max_connections(4)
            .connect(&url)
            .await
            .expect("connect to TEST_DATABASE_URL");
        super::ensure_schema(&db).await.expect("ensure schema");
        Some(db)
    }

    /// A database of its own on the `TEST_DATABASE_URL` server, for tests that
    /// need empty tables. Call [`ScratchDb::destroy`] when done.
    pub struct ScratchDb {
        pub pool: PgPool,
        admin: PgPool,
        name: String,
    }

    impl ScratchDb {
        pub async fn create(tag: &str) -> Option<Self> {
            let admin = test_pool().await?;
            let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
            let name = format!("fittrack_{tag}_{nanos}");
            admin
                .execute(format!("CREATE DATABASE {name}").as_str())
                .await
                .expect("create scratch database");

            let url = std::env::var("TEST_DATABASE_URL").ok()?;
            let options = PgConnectOptions::from_str(&url)
                .expect("parse TEST_DATABASE_URL")
                .database(&name);
            let pool = PgPoolOptions::new()
                .max_connections(2)
                .connect_with(options)
                .await
                .expect("connect to scratch database");
            super::ensure_schema(&pool).await.expect("ensure schema");
            Some(Self { pool, admin, name })
        }

        pub async fn destroy(self) {
            self.pool.close().await;
            self.admin
                .execute(format!("DROP DATABASE IF EXISTS {}", self.name).as_str())
                .await
                .expect("drop scratch database");
        }
    }

    /// An email no other test run has used.
    pub fn unique_email(tag: &str) -> String {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
        format!("{tag}-{nanos}-{n}@example.com")
    }

    pub async fn make_user(db: &PgPool, name: &str) -> i32 {
        repo::add_user(db, name, &unique_email(name), Some(70.0), Some(175.0))
            .await
            .expect("add user")
    }
}
