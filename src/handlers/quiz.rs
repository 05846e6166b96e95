// src/handlers/quiz.rs

use std::collections::HashMap;

use axum::{Extension, Json, extract::State, response::IntoResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    config::QUIZ_QUESTION_COUNT,
    error::AppError,
    models::{question::QuestionAnswer, user::User},
    state::AppState,
    utils::jwt::Claims,
};

/// DTO for submitting quiz answers.
///
/// Keys are the form field names `question-1` .. `question-10`; values
/// are the submitted answer strings ("True" / "False").
#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub answers: HashMap<String, String>,
}

/// Serves the current round's paper and records the start time.
///
/// Refused once the user has submitted this round. The expected answers
/// are included in the payload; the client is trusted not to surface
/// them before submission (carried over from the original design).
pub async fn start_quiz(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let user = fetch_user(&state, claims.user_id()).await?;

    if user.quiz_submitted {
        return Err(AppError::AlreadySubmitted);
    }

    let questions: Vec<QuestionAnswer> = {
        let bank = state.question_bank.read().await;
        bank.take(QUIZ_QUESTION_COUNT).to_vec()
    };

    let started_at = state.quiz_sessions.begin(user.id).await;
    tracing::debug!("quiz round started for user {} at {}", user.id, started_at);

    Ok(Json(serde_json::json!({
        "questions": questions,
        "started_at": started_at,
    })))
}

/// Grades a quiz submission.
///
/// * Refuses with `AlreadySubmitted` if the round was already graded.
/// * Refuses with `MissingStartMarker` if no start time is on record;
///   neither refusal mutates the user row.
/// * Otherwise applies score, elapsed time and the cumulative totals in
///   a single UPDATE, so the round either commits fully or not at all.
pub async fn submit_quiz(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SubmitQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = fetch_user(&state, claims.user_id()).await?;

    if user.quiz_submitted {
        return Err(AppError::AlreadySubmitted);
    }

    let selected: Vec<QuestionAnswer> = {
        let bank = state.question_bank.read().await;
        bank.take(QUIZ_QUESTION_COUNT).to_vec()
    };

    let score = count_correct(&req.answers, &selected);

    let started_at = state
        .quiz_sessions
        .consume(user.id)
        .await
        .ok_or(AppError::MissingStartMarker)?;

    let elapsed_seconds = (Utc::now().timestamp() - started_at).max(0);
    let time_taken = format_elapsed(elapsed_seconds);
    let total_time = merge_total_time(&user.total_time, &time_taken)?;

    sqlx::query(
        r#"
        UPDATE users
        SET score = ?,
            total_score = total_score + ?,
            time_taken = ?,
            elapsed_time = ?,
            total_time = ?,
            quiz_submitted = 1
        WHERE id = ?
        "#,
    )
    .bind(score)
    .bind(score)
    .bind(&time_taken)
    .bind(&time_taken)
    .bind(&total_time)
    .bind(user.id)
    .execute(&state.pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to store quiz result for user {}: {:?}", user.id, e);
        AppError::InternalServerError(e.to_string())
    })?;

    tracing::info!(
        "user {} scored {}/{} in {}",
        user.id,
        score,
        selected.len(),
        time_taken
    );

    Ok(Json(serde_json::json!({
        "score": score,
        "time_taken": time_taken,
        "total_score": user.total_score + score,
        "total_time": total_time,
        "message": "Quiz submitted successfully!",
    })))
}

async fn fetch_user(state: &AppState, user_id: i64) -> Result<User, AppError> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password, image_file,
               score, total_score, time_taken, elapsed_time, total_time,
               quiz_submitted, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::NotFound("User not found".to_string()))
}

/// Counts exact string matches between the submitted `question-<i>`
/// fields and the expected answers of the selected paper. Missing or
/// unrecognized fields never count.
pub fn count_correct(answers: &HashMap<String, String>, selected: &[QuestionAnswer]) -> i64 {
    selected
        .iter()
        .enumerate()
        .filter(|(i, qa)| {
            answers
                .get(&format!("question-{}", i + 1))
                .map(|submitted| submitted == &qa.answer)
                .unwrap_or(false)
        })
        .count() as i64
}

/// Formats a round duration as `minutes:seconds`, seconds zero-padded.
/// Minutes are not padded and never roll over into hours; the per-round
/// field is a display string, not a parsed duration.
pub fn format_elapsed(elapsed_seconds: i64) -> String {
    format!("{}:{:02}", elapsed_seconds / 60, elapsed_seconds % 60)
}

/// Adds a `minutes:seconds` round duration onto a `HH:MM:SS` total,
/// carrying seconds into minutes and minutes into hours.
pub fn merge_total_time(total_time: &str, round_time: &str) -> Result<String, AppError> {
    let (round_minutes, round_seconds) = parse_round_time(round_time)?;

    let parts: Vec<i64> = total_time
        .split(':')
        .map(|p| p.parse::<i64>())
        .collect::<Result<_, _>>()
        .map_err(|_| malformed_time(total_time))?;
    let [mut hours, mut minutes, mut seconds]: [i64; 3] =
        parts.try_into().map_err(|_| malformed_time(total_time))?;

    seconds += round_seconds;
    minutes += round_minutes;

    minutes += seconds / 60;
    seconds %= 60;
    hours += minutes / 60;
    minutes %= 60;

    Ok(format!("{:02}:{:02}:{:02}", hours, minutes, seconds))
}

fn parse_round_time(round_time: &str) -> Result<(i64, i64), AppError> {
    let (minutes, seconds) = round_time
        .split_once(':')
        .ok_or_else(|| malformed_time(round_time))?;
    Ok((
        minutes.parse().map_err(|_| malformed_time(round_time))?,
        seconds.parse().map_err(|_| malformed_time(round_time))?,
    ))
}

fn malformed_time(value: &str) -> AppError {
    AppError::InternalServerError(format!("malformed stored time '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(answers: &[&str]) -> Vec<QuestionAnswer> {
        answers
            .iter()
            .enumerate()
            .map(|(i, a)| QuestionAnswer {
                question: format!("Question {}", i + 1),
                answer: (*a).to_string(),
            })
            .collect()
    }

    fn submission(answers: &[&str]) -> HashMap<String, String> {
        answers
            .iter()
            .enumerate()
            .map(|(i, a)| (format!("question-{}", i + 1), (*a).to_string()))
            .collect()
    }

    const ROUND: [&str; 10] = [
        "True", "True", "False", "True", "False", "True", "True", "True", "True", "False",
    ];

    #[test]
    fn all_correct_scores_ten() {
        let selected = paper(&ROUND);
        let answers = submission(&ROUND);
        assert_eq!(count_correct(&answers, &selected), 10);
    }

    #[test]
    fn three_flipped_answers_score_seven() {
        let selected = paper(&ROUND);
        let mut flipped = ROUND;
        for i in [0, 4, 9] {
            flipped[i] = if flipped[i] == "True" { "False" } else { "True" };
        }
        let answers = submission(&flipped);
        assert_eq!(count_correct(&answers, &selected), 7);
    }

    #[test]
    fn missing_fields_do_not_count() {
        let selected = paper(&ROUND);
        let mut answers = submission(&ROUND);
        answers.remove("question-3");
        answers.remove("question-7");
        assert_eq!(count_correct(&answers, &selected), 8);
    }

    #[test]
    fn unrelated_fields_are_ignored() {
        let selected = paper(&ROUND);
        let mut answers = submission(&ROUND);
        answers.insert("question-11".to_string(), "True".to_string());
        answers.insert("comment".to_string(), "hi".to_string());
        assert_eq!(count_correct(&answers, &selected), 10);
    }

    #[test]
    fn format_elapsed_pads_seconds_only() {
        assert_eq!(format_elapsed(5), "0:05");
        assert_eq!(format_elapsed(75), "1:15");
        assert_eq!(format_elapsed(600), "10:00");
    }

    #[test]
    fn format_elapsed_has_no_hour_rollover() {
        assert_eq!(format_elapsed(3700), "61:40");
    }

    #[test]
    fn merge_total_time_carries_seconds_and_minutes() {
        assert_eq!(merge_total_time("01:59:50", "0:15").unwrap(), "02:00:05");
    }

    #[test]
    fn merge_total_time_from_zero() {
        assert_eq!(merge_total_time("00:00:00", "1:15").unwrap(), "00:01:15");
    }

    #[test]
    fn merge_total_time_accepts_unpadded_minutes() {
        assert_eq!(merge_total_time("00:05:30", "61:40").unwrap(), "01:07:10");
    }

    #[test]
    fn merge_total_time_rejects_malformed_total() {
        assert!(merge_total_time("bogus", "0:15").is_err());
        assert!(merge_total_time("00:00", "0:15").is_err());
    }

    #[test]
    fn merge_total_time_rejects_malformed_round() {
        assert!(merge_total_time("00:00:00", "15").is_err());
    }
}
