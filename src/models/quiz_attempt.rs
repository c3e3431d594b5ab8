// src/models/quiz_attempt.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use sqlx::{FromRow, types::Json};

/// Represents the 'quiz_attempts' table in the database.
/// One row per submitted attempt.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    /// Internal record identifier, the key used by the delete route.
    #[serde(rename = "_id")]
    pub id: i64,

    /// Client-supplied key grouping the attempts of one quiz series.
    pub quiz_id: String,

    /// Attempt number within `quiz_id`, starting at 1.
    pub quiz: i32,

    /// Free-form category label, absent when the client sent none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_type: Option<String>,

    pub created_at: DateTime<Utc>,

    /// Stored as a JSONB array.
    pub questions: Json<Vec<QuestionResult>>,
}

/// A single answered question embedded in an attempt.
///
/// Every field is free-form text. Numbers and booleans are accepted on input
/// and kept as their string form, so `"score": 1` is stored as `"1"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub user_response: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// DTO for submitting a quiz attempt.
/// `questions` must be present and be an array, otherwise the body is rejected.
/// `quizId` is the history key and must be present. Scalars are taken as text
/// for both `quizId` and `quizType`, the same way question fields are.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[serde(deserialize_with = "lenient_required_string")]
    pub quiz_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub quiz_type: Option<String>,
    pub questions: Vec<QuestionResult>,
}

/// Accepts a string, number or boolean as text. `null` maps to `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string, found {}",
            other
        ))),
    }
}

fn lenient_required_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer)?.ok_or_else(|| de::Error::custom("expected a string, found null"))
}
