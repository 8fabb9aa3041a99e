use axum::Json;

use crate::message::HealthResponse;

/// Liveness probe. Does not touch the generator.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
