//! Todo API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use entities::Task;
use serde::{Deserialize, Serialize};
use todo_store::TodoStore;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Request body for creating a task.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Task text. Rejected with 400 when missing or null.
    pub item: Option<String>,
}

/// Response body for a created task.
#[derive(Debug, Serialize)]
pub struct CreateTodoResponse {
    pub message: &'static str,
    pub item: Task,
}

/// Response body for a deleted task.
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub message: &'static str,
}

/// Lists all tasks.
pub async fn list_todos<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<Vec<Task>>> {
    let tasks = state.store.list().await?;
    Ok(Json(tasks))
}

/// Creates a task from the request content.
pub async fn create_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateTodoRequest>,
) -> ServerResult<(StatusCode, Json<CreateTodoResponse>)> {
    let content = request
        .item
        .ok_or_else(|| ServerError::InvalidRequest("item is required".to_string()))?;

    let task = state.store.create(&content).await?;

    tracing::info!(id = task.id, "Task created");

    Ok((
        StatusCode::CREATED,
        Json(CreateTodoResponse {
            message: "Added",
            item: task,
        }),
    ))
}

/// Deletes the task with the given id.
pub async fn delete_todo<S: TodoStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
) -> ServerResult<Json<DeleteTodoResponse>> {
    state.store.delete(id).await?;

    tracing::info!(id, "Task deleted");

    Ok(Json(DeleteTodoResponse {
        message: "Task deleted",
    }))
}
