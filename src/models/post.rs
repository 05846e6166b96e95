// src/models/post.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'posts' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub date_posted: Option<chrono::NaiveDateTime>,
}

/// DTO for a post joined with its author's username.
#[derive(Debug, Serialize, FromRow)]
pub struct PostResponse {
    pub id: i64,
    pub user_id: i64,
    pub author_username: String,
    pub title: String,
    pub content: String,
    pub date_posted: Option<chrono::NaiveDateTime>,
}

/// DTO for creating a new post.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Title length must be between 1 and 100 characters."
    ))]
    pub title: String,
    #[validate(length(min = 1, message = "Content cannot be empty."))]
    pub content: String,
}

/// DTO for updating a post. Fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
}
