use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Friend {
    pub user_id: i32,
    pub name: String,
}

/// Minutes trained this week by one person on the board.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct LeaderboardRow {
    pub user_id: i32,
    pub name: String,
    pub total_minutes: i64,
}
