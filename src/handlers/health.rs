// src/handlers/health.rs

/// Liveness probe. Does not touch the store.
pub async fn health_check() -> &'static str {
    "OK"
}
