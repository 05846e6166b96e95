// src/scheduler.rs

use chrono::{Days, Local, NaiveDateTime, NaiveTime};
use tokio::task::JoinHandle;

use crate::state::AppState;

/// Spawns the recurring daily reset task.
///
/// The task is anchored to the wall clock: every iteration recomputes
/// the delay until the next local midnight, so a restarted process picks
/// the schedule back up instead of drifting with uptime. It lives on the
/// runtime independently of request handling and stops with it.
pub fn spawn_daily_reset(state: AppState) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let wait = duration_until_next_midnight(Local::now().naive_local());
            tracing::info!("next quiz reset in {}s", wait.as_secs());
            tokio::time::sleep(wait).await;
            run_reset(&state).await;
        }
    })
}

/// Reshuffles the question bank and clears every user's round state.
///
/// `total_score` and `total_time` are cumulative across rounds and are
/// left untouched. A failure for one user is logged and the loop moves
/// on; a partial reset is preferable to an aborted one.
pub async fn run_reset(state: &AppState) {
    tracing::info!("daily quiz reset: reshuffling questions and clearing round state");

    {
        let mut bank = state.question_bank.write().await;
        bank.shuffle(&mut rand::thread_rng());
    }

    let user_ids: Vec<i64> = match sqlx::query_scalar("SELECT id FROM users")
        .fetch_all(&state.pool)
        .await
    {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!("quiz reset: failed to list users: {:?}", e);
            return;
        }
    };

    let mut cleared = 0usize;
    for user_id in user_ids {
        let result = sqlx::query(
            "UPDATE users SET score = 0, quiz_submitted = 0, time_taken = '00:00' WHERE id = ?",
        )
        .bind(user_id)
        .execute(&state.pool)
        .await;

        match result {
            Ok(_) => cleared += 1,
            Err(e) => {
                tracing::error!("quiz reset: failed to clear user {}: {:?}", user_id, e);
            }
        }
    }

    tracing::info!("quiz reset complete: {} users cleared", cleared);
}

/// Delay from `now` until the next 00:00:00.
pub fn duration_until_next_midnight(now: NaiveDateTime) -> std::time::Duration {
    let next_midnight = (now.date() + Days::new(1)).and_time(NaiveTime::MIN);
    (next_midnight - now)
        .to_std()
        .unwrap_or(std::time::Duration::from_secs(60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn just_before_midnight_waits_seconds() {
        let wait = duration_until_next_midnight(at(23, 59, 30));
        assert_eq!(wait.as_secs(), 30);
    }

    #[test]
    fn at_midnight_waits_a_full_day() {
        let wait = duration_until_next_midnight(at(0, 0, 0));
        assert_eq!(wait.as_secs(), 86_400);
    }

    #[test]
    fn midday_waits_until_next_day() {
        let wait = duration_until_next_midnight(at(12, 0, 0));
        assert_eq!(wait.as_secs(), 43_200);
    }
}
