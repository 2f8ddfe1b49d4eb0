use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddFriendRequest {
    pub friend_id: i32,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user_id: i32,
    pub name: String,
    pub total_minutes: i64,
}
