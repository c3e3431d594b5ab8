// src/routes.rs

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{health, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * `POST /api/quiz`, `GET /api/history/{quizId}`, `DELETE /api/quiz/{id}`.
/// * `GET /health` for liveness.
/// * Applies global middleware (Trace, CORS from any origin).
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/quiz", post(quiz::create_quiz))
        .route("/quiz/{id}", delete(quiz::delete_quiz))
        .route("/history/{quiz_id}", get(quiz::get_history));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
