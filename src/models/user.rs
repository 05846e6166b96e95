// src/models/user.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'users' table in the database.
///
/// The quiz columns hold one round of state (`score`, `time_taken`,
/// `quiz_submitted`) plus lifetime accumulations (`total_score`,
/// `total_time`) that survive the daily reset.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    /// Unique username.
    pub username: String,

    /// Unique email address, used for login.
    pub email: String,

    /// Argon2 password hash.
    /// Skipped during serialization to prevent leaking sensitive data.
    #[serde(skip)]
    pub password: String,

    /// Profile picture filename (upload handling lives outside this service).
    pub image_file: String,

    /// Points earned in the most recent quiz round. Cleared daily.
    pub score: i64,

    /// Accumulated points across rounds. Only ever incremented by grading.
    pub total_score: i64,

    /// Most recent round duration, formatted `minutes:seconds`.
    pub time_taken: String,

    /// Duplicate of `time_taken` kept for the account view.
    pub elapsed_time: String,

    /// Lifetime quiz duration, formatted `HH:MM:SS`. Never cleared.
    pub total_time: String,

    /// True once the user has submitted the current round; blocks
    /// re-submission until the scheduled reset clears it.
    pub quiz_submitted: bool,

    pub created_at: Option<chrono::NaiveDateTime>,
}

/// DTO for creating a new user (Registration).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username length must be between 3 and 50 characters."
    ))]
    pub username: String,
    #[validate(email(message = "Invalid email address."))]
    pub email: String,
    #[validate(length(
        min = 4,
        max = 128,
        message = "Password length must be between 4 and 128 characters."
    ))]
    pub password: String,
}

/// DTO for user login.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// DTO for updating the account profile. Fields are optional.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username length must be between 3 and 50 characters."
    ))]
    pub username: Option<String>,
    #[validate(email(message = "Invalid email address."))]
    pub email: Option<String>,
}
