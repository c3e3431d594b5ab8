// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use quiz_history::{
    models::quiz_attempt::{CreateQuizRequest, QuizAttempt},
    routes,
    state::AppState,
    store::QuizStore,
};
use sqlx::types::Json;

/// In-process `QuizStore` used to exercise the HTTP surface without a database.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: Vec<QuizAttempt>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.inner.lock().unwrap().rows.iter().map(|r| r.id).collect()
    }
}

#[async_trait]
impl QuizStore for MemoryStore {
    async fn create_attempt(&self, attempt: CreateQuizRequest) -> Result<QuizAttempt, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        let last = inner
            .rows
            .iter()
            .filter(|r| r.quiz_id == attempt.quiz_id)
            .map(|r| r.quiz)
            .max();

        inner.next_id += 1;
        let row = QuizAttempt {
            id: inner.next_id,
            quiz_id: attempt.quiz_id,
            quiz: last.map_or(1, |n| n + 1),
            quiz_type: attempt.quiz_type,
            created_at: Utc::now(),
            questions: Json(attempt.questions),
        };
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn list_by_quiz_id(&self, quiz_id: &str) -> Result<Vec<QuizAttempt>, sqlx::Error> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .rows
            .iter()
            .filter(|r| r.quiz_id == quiz_id)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<QuizAttempt>, sqlx::Error> {
        let mut inner = self.inner.lock().unwrap();
        let position = inner.rows.iter().position(|r| r.id == id);
        Ok(position.map(|i| inner.rows.remove(i)))
    }
}

/// Store whose every call fails the way an unreachable database does.
pub struct BrokenStore;

#[async_trait]
impl QuizStore for BrokenStore {
    async fn create_attempt(&self, _attempt: CreateQuizRequest) -> Result<QuizAttempt, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn list_by_quiz_id(&self, _quiz_id: &str) -> Result<Vec<QuizAttempt>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn delete_by_id(&self, _id: i64) -> Result<Option<QuizAttempt>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

/// Spawns the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app_with(state: AppState) -> String {
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Spawns the app over a fresh `MemoryStore` and hands the store back for inspection.
pub async fn spawn_app() -> (String, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let state = AppState {
        store: store.clone(),
    };
    (spawn_app_with(state).await, store)
}

pub fn sample_attempt(quiz_id: &str) -> serde_json::Value {
    serde_json::json!({
        "quizId": quiz_id,
        "quizType": "math",
        "questions": [{
            "question": "2+2",
            "answer": "4",
            "userResponse": "4",
            "score": "1",
            "feedback": "ok",
            "explanation": ""
        }]
    })
}
