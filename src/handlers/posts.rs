// src/handlers/posts.rs

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;
use validator::Validate;

use crate::{
    error::AppError,
    models::post::{CreatePostRequest, Post, PostResponse, UpdatePostRequest},
    utils::{html::clean_html, jwt::Claims},
};

/// Lists all blog posts, newest first.
pub async fn list_posts(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let posts = sqlx::query_as::<_, PostResponse>(
        r#"
        SELECT p.id, p.user_id, u.username AS author_username,
               p.title, p.content, p.date_posted
        FROM posts p
        JOIN users u ON p.user_id = u.id
        ORDER BY p.date_posted DESC, p.id DESC
        "#,
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to list posts: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(posts))
}

/// Retrieves a single post by ID.
pub async fn get_post(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let post = sqlx::query_as::<_, PostResponse>(
        r#"
        SELECT p.id, p.user_id, u.username AS author_username,
               p.title, p.content, p.date_posted
        FROM posts p
        JOIN users u ON p.user_id = u.id
        WHERE p.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::NotFound("Post not found".to_string()))?;

    Ok(Json(post))
}

/// Creates a new post authored by the current user.
/// Content is sanitized before storage.
pub async fn create_post(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let content = clean_html(&payload.content);

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, title, content)
        VALUES (?, ?, ?)
        RETURNING id, user_id, title, content, date_posted
        "#,
    )
    .bind(claims.user_id())
    .bind(&payload.title)
    .bind(&content)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to create post: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Updates a post. Only the author may update it.
pub async fn update_post(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let post = fetch_owned_post(&pool, id, claims.user_id()).await?;

    if let Some(new_title) = payload.title {
        sqlx::query("UPDATE posts SET title = ? WHERE id = ?")
            .bind(&new_title)
            .bind(post.id)
            .execute(&pool)
            .await?;
    }

    if let Some(new_content) = payload.content {
        sqlx::query("UPDATE posts SET content = ? WHERE id = ?")
            .bind(clean_html(&new_content))
            .bind(post.id)
            .execute(&pool)
            .await?;
    }

    Ok(StatusCode::OK)
}

/// Deletes a post. Only the author may delete it.
pub async fn delete_post(
    State(pool): State<SqlitePool>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let post = fetch_owned_post(&pool, id, claims.user_id()).await?;

    sqlx::query("DELETE FROM posts WHERE id = ?")
        .bind(post.id)
        .execute(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete post {}: {:?}", post.id, e);
            AppError::InternalServerError(e.to_string())
        })?;

    Ok(StatusCode::NO_CONTENT)
}

/// Fetches a post and checks ownership: 404 if absent, 403 if owned by
/// someone else.
async fn fetch_owned_post(pool: &SqlitePool, id: i64, user_id: i64) -> Result<Post, AppError> {
    let post = sqlx::query_as::<_, Post>(
        "SELECT id, user_id, title, content, date_posted FROM posts WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound("Post not found".to_string()))?;

    if post.user_id != user_id {
        return Err(AppError::Forbidden(
            "You can only modify your own posts".to_string(),
        ));
    }

    Ok(post)
}
