use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::database::DatabaseManager;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /health - liveness plus a store ping
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match DatabaseManager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "database": "ok" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ApiError::service_unavailable(e.to_string()).into_response()
        }
    }
}

/// Router-wide fallback for undefined paths
pub async fn not_found() -> ApiError {
    ApiError::not_found("no route")
}

/// Per-path fallback for verbs the path does not define
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
