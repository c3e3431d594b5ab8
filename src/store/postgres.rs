// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::{PgPool, types::Json};

use super::QuizStore;
use crate::models::quiz_attempt::{CreateQuizRequest, QuizAttempt};

/// `QuizStore` backed by the `quiz_attempts` table.
#[derive(Clone)]
pub struct PgQuizStore {
    pool: PgPool,
}

impl PgQuizStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizStore for PgQuizStore {
    async fn create_attempt(&self, attempt: CreateQuizRequest) -> Result<QuizAttempt, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        // Serializes numbering per quiz_id until commit.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(&attempt.quiz_id)
            .execute(&mut *tx)
            .await?;

        let created = sqlx::query_as::<_, QuizAttempt>(
            r#"
            INSERT INTO quiz_attempts (quiz_id, quiz, quiz_type, questions)
            SELECT $1, COALESCE(MAX(quiz), 0) + 1, $2, $3
            FROM quiz_attempts
            WHERE quiz_id = $1
            RETURNING id, quiz_id, quiz, quiz_type, created_at, questions
            "#,
        )
        .bind(&attempt.quiz_id)
        .bind(&attempt.quiz_type)
        .bind(Json(&attempt.questions))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn list_by_quiz_id(&self, quiz_id: &str) -> Result<Vec<QuizAttempt>, sqlx::Error> {
        sqlx::query_as::<_, QuizAttempt>(
            r#"
            SELECT id, quiz_id, quiz, quiz_type, created_at, questions
            FROM quiz_attempts
            WHERE quiz_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<QuizAttempt>, sqlx::Error> {
        sqlx::query_as::<_, QuizAttempt>(
            r#"
            DELETE FROM quiz_attempts
            WHERE id = $1
            RETURNING id, quiz_id, quiz, quiz_type, created_at, questions
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
