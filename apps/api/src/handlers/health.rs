use axum::Json;

use crate::dto::HealthResponse;

/// Liveness check. Backend reachability is not probed here.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
