use std::collections::HashSet;

use super::{
    dto::LeaderboardEntry,
    repo_types::{Friend, LeaderboardRow},
};
use crate::users::repo_types::UserSummary;

/// Users that could be added: everyone except `user_id` and current friends.
pub fn friend_candidates(user_id: i32, all: Vec<UserSummary>, friends: &[Friend]) -> Vec<UserSummary> {
    let taken: HashSet<i32> = friends.iter().map(|f| f.user_id).collect();
    all.into_iter()
        .filter(|u| u.user_id != user_id && !taken.contains(&u.user_id))
        .collect()
}

/// Number rows from 1 in the order the query returned them.
pub fn rank(rows: Vec<LeaderboardRow>) -> Vec<LeaderboardEntry> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| LeaderboardEntry {
            rank: i + 1,
            user_id: row.user_id,
            name: row.name,
            total_minutes: row.total_minutes,
        })
        .collect()
}
