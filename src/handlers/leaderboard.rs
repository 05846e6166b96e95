// src/handlers/leaderboard.rs

use axum::{Json, extract::State, response::IntoResponse};
use sqlx::SqlitePool;

use crate::{
    config::LEADERBOARD_SIZE,
    error::AppError,
    models::{
        leaderboard::{AllTimeEntry, RoundEntry, all_time_ranking, round_ranking},
        user::User,
    },
};

/// Home page data: the top 10 of the current round (submitted users
/// only) and the top 10 all-time by total score.
pub async fn home(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let users = fetch_all_users(&pool).await?;

    let top_10: Vec<RoundEntry> = round_ranking(&users)
        .into_iter()
        .take(LEADERBOARD_SIZE)
        .map(RoundEntry::from)
        .collect();

    let all_time: Vec<AllTimeEntry> = all_time_ranking(&users)
        .into_iter()
        .take(LEADERBOARD_SIZE)
        .map(AllTimeEntry::from)
        .collect();

    Ok(Json(serde_json::json!({
        "top_10": top_10,
        "all_time": all_time,
    })))
}

/// Ranking is computed in-process over the full user list, matching the
/// small scale this service is built for.
pub(crate) async fn fetch_all_users(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password, image_file,
               score, total_score, time_taken, elapsed_time, total_time,
               quiz_submitted, created_at
        FROM users
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch users for ranking: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(users)
}
