// src/handlers/quiz.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{error::AppError, models::quiz_attempt::CreateQuizRequest, state::DynQuizStore};

/// Saves a quiz attempt.
///
/// * Rejects bodies whose `questions` is missing or not an array (400).
/// * Numbers the attempt one past the latest attempt for the same `quizId`.
pub async fn create_quiz(
    State(store): State<DynQuizStore>,
    payload: Result<Json<CreateQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;

    let quiz_id = req.quiz_id.clone();
    let attempt = store
        .create_attempt(req)
        .await
        .map_err(|e| AppError::InternalServerError(format!("Failed to save quiz data: {}", e)))?;

    tracing::info!(quiz_id = %quiz_id, quiz = attempt.quiz, id = attempt.id, "Quiz attempt saved");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Quiz data saved successfully",
            "id": attempt.id,
            "quiz": attempt.quiz,
        })),
    ))
}

/// Lists every attempt recorded under `quiz_id`, oldest first.
pub async fn get_history(
    State(store): State<DynQuizStore>,
    Path(quiz_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let history = store
        .list_by_quiz_id(&quiz_id)
        .await
        .map_err(|e| AppError::InternalServerError(format!("Failed to fetch history: {}", e)))?;

    Ok(Json(history))
}

/// Deletes one attempt by its internal record id.
/// Only plain decimal ids match a record; anything else yields 404.
pub async fn delete_quiz(
    State(store): State<DynQuizStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let not_found = || AppError::NotFound("Quiz not found".to_string());

    let id = parse_record_id(&id).ok_or_else(not_found)?;

    store
        .delete_by_id(id)
        .await
        .map_err(|e| AppError::InternalServerError(format!("Failed to delete quiz: {}", e)))?
        .ok_or_else(not_found)?;

    tracing::info!(id, "Quiz attempt deleted");

    Ok(Json(serde_json::json!({
        "message": "Quiz deleted successfully"
    })))
}

/// Record ids have one spelling: ASCII digits, no sign, no leading zeros.
fn parse_record_id(raw: &str) -> Option<i64> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));
    if !canonical {
        return None;
    }
    raw.parse().ok()
}
