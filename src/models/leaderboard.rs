// src/models/leaderboard.rs

use serde::Serialize;

use crate::models::user::User;

/// One row of the per-round leaderboard.
#[derive(Debug, Serialize)]
pub struct RoundEntry {
    pub username: String,
    pub score: i64,
    pub time_taken: String,
}

impl From<&User> for RoundEntry {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            score: user.score,
            time_taken: user.time_taken.clone(),
        }
    }
}

/// One row of the all-time leaderboard.
#[derive(Debug, Serialize)]
pub struct AllTimeEntry {
    pub username: String,
    pub total_score: i64,
    pub time_taken: String,
}

impl From<&User> for AllTimeEntry {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            total_score: user.total_score,
            time_taken: user.time_taken.clone(),
        }
    }
}

/// Ranks the users who submitted the current round: `score` descending,
/// ties broken by `time_taken` ascending.
///
/// `time_taken` is compared as a string, so "10:00" sorts before "9:05".
/// This matches the stored display format and is relied on by the views.
pub fn round_ranking(users: &[User]) -> Vec<&User> {
    let mut ranked: Vec<&User> = users.iter().filter(|u| u.quiz_submitted).collect();
    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.time_taken.cmp(&b.time_taken))
    });
    ranked
}

/// Ranks all users by `total_score` descending, `time_taken` ascending
/// (string comparison, as above).
pub fn all_time_ranking(users: &[User]) -> Vec<&User> {
    let mut ranked: Vec<&User> = users.iter().collect();
    ranked.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| a.time_taken.cmp(&b.time_taken))
    });
    ranked
}

/// 1-based position of the user in an already-ranked list, or `None` if
/// the user is not present (has not submitted this round).
pub fn rank_of(user_id: i64, ranked: &[&User]) -> Option<usize> {
    ranked.iter().position(|u| u.id == user_id).map(|i| i + 1)
}
