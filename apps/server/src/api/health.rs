//! Health check endpoint.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use todo_store::TodoStore;

use crate::state::AppState;

/// Reports whether a storage round-trip currently succeeds.
pub async fn health_check<S: TodoStore>(State(state): State<Arc<AppState<S>>>) -> Response {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "storage": state.store.backend(),
            })),
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "unhealthy",
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}
