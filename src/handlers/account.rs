// src/handlers/account.rs

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    handlers::leaderboard::fetch_all_users,
    models::{
        leaderboard::{RoundEntry, rank_of, round_ranking},
        user::UpdateAccountRequest,
    },
    utils::jwt::Claims,
};

/// Current user's profile plus the full round ranking and the viewer's
/// own 1-based rank (`null` until they submit this round).
pub async fn get_account(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.user_id();

    let users = fetch_all_users(&pool).await?;

    let me = users
        .iter()
        .find(|u| u.id == user_id)
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    let ranked = round_ranking(&users);
    let rank = rank_of(user_id, &ranked);
    let ranking: Vec<RoundEntry> = ranked.into_iter().map(RoundEntry::from).collect();

    Ok(Json(serde_json::json!({
        "user": me,
        "rank": rank,
        "ranking": ranking,
    })))
}

/// Updates the profile fields of the current user.
pub async fn update_account(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<UpdateAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let user_id = claims.user_id();

    // Check existence
    sqlx::query("SELECT id FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(&pool)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?
        .ok_or(AppError::NotFound("User not found".to_string()))?;

    // Perform updates sequentially if fields are present
    if let Some(new_username) = payload.username {
        sqlx::query("UPDATE users SET username = ? WHERE id = ?")
            .bind(&new_username)
            .bind(user_id)
            .execute(&pool)
            .await
            .map_err(unique_or_internal)?;
    }

    if let Some(new_email) = payload.email {
        sqlx::query("UPDATE users SET email = ? WHERE id = ?")
            .bind(&new_email)
            .bind(user_id)
            .execute(&pool)
            .await
            .map_err(unique_or_internal)?;
    }

    Ok(StatusCode::OK)
}

fn unique_or_internal(e: sqlx::Error) -> AppError {
    if e.to_string().contains("UNIQUE constraint failed") {
        AppError::Conflict("Username or email already taken".to_string())
    } else {
        AppError::InternalServerError(e.to_string())
    }
}
