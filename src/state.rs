use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::models::question::QuestionBank;
use crate::session::QuizSessionTracker;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    /// Process-wide question pool. Write-locked only by the scheduled
    /// reshuffle; quiz handlers take read locks.
    pub question_bank: Arc<RwLock<QuestionBank>>,
    pub quiz_sessions: QuizSessionTracker,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            pool,
            config,
            question_bank: Arc::new(RwLock::new(QuestionBank::seeded())),
            quiz_sessions: QuizSessionTracker::new(),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
