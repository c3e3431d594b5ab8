// src/store/mod.rs

use async_trait::async_trait;

use crate::models::quiz_attempt::{CreateQuizRequest, QuizAttempt};

pub mod postgres;

pub use postgres::PgQuizStore;

/// Persistence seam for quiz attempts.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Persists a new attempt numbered one past the highest existing `quiz`
    /// for the same `quiz_id` (1 for a new series).
    /// Numbering must be atomic with respect to concurrent calls.
    async fn create_attempt(&self, attempt: CreateQuizRequest) -> Result<QuizAttempt, sqlx::Error>;

    /// All attempts for `quiz_id`, oldest first.
    async fn list_by_quiz_id(&self, quiz_id: &str) -> Result<Vec<QuizAttempt>, sqlx::Error>;

    /// Removes the attempt with the given internal id and returns it,
    /// or `None` when no such record exists.
    async fn delete_by_id(&self, id: i64) -> Result<Option<QuizAttempt>, sqlx::Error>;
}
