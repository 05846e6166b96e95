// src/session.rs

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

/// Tracks quiz start times per authenticated user.
///
/// A marker is written when the quiz page is served and removed when the
/// matching submission arrives, so each user has at most one round in
/// flight. A marker left behind by an abandoned round is simply
/// overwritten by the next GET.
#[derive(Clone, Default)]
pub struct QuizSessionTracker {
    inner: Arc<Mutex<HashMap<i64, i64>>>,
}

impl QuizSessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current Unix timestamp for the user and returns it.
    pub async fn begin(&self, user_id: i64) -> i64 {
        let now = Utc::now().timestamp();
        self.inner.lock().await.insert(user_id, now);
        now
    }

    /// Atomically removes and returns the stored start timestamp.
    /// `None` means there was no prior GET (or the marker was already
    /// consumed) and the submission must be rejected.
    pub async fn consume(&self, user_id: i64) -> Option<i64> {
        self.inner.lock().await.remove(&user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn consume_returns_begun_timestamp() {
        let tracker = QuizSessionTracker::new();
        let started = tracker.begin(1).await;
        assert_eq!(tracker.consume(1).await, Some(started));
    }

    #[tokio::test]
    async fn consume_is_read_and_delete() {
        let tracker = QuizSessionTracker::new();
        tracker.begin(1).await;
        assert!(tracker.consume(1).await.is_some());
        assert_eq!(tracker.consume(1).await, None);
    }

    #[tokio::test]
    async fn consume_without_begin_is_none() {
        let tracker = QuizSessionTracker::new();
        assert_eq!(tracker.consume(42).await, None);
    }

    #[tokio::test]
    async fn begin_overwrites_stale_marker() {
        let tracker = QuizSessionTracker::new();
        tracker.begin(1).await;
        let second = tracker.begin(1).await;
        assert_eq!(tracker.consume(1).await, Some(second));
        assert_eq!(tracker.consume(1).await, None);
    }

    #[tokio::test]
    async fn markers_are_per_user() {
        let tracker = QuizSessionTracker::new();
        tracker.begin(1).await;
        assert_eq!(tracker.consume(2).await, None);
        assert!(tracker.consume(1).await.is_some());
    }
}
