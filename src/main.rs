mod app;
mod calendar;
mod config;
mod db;
mod error;
mod extractors;
mod goals;
mod insights;
mod seed;
mod social;
mod state;
mod users;
mod validation;
mod workouts;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "fittrack=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = AppState::init().await?;
    db::ensure_schema(&app_state.db).await?;

    if app_state.config.seed_demo_data {
        if let Err(e) = seed::seed_demo_data(&app_state.db, calendar::today()).await {
            tracing::warn!(error = %e, "demo seeding failed; continuing");
        }
    }

    tracing::info!(user_id = app_state.config.current_user_id, "acting as configured user");
    app::serve(app::build_app(app_state)).await
}
