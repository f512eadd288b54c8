//! API endpoints.

pub mod health;
pub mod todo;

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{delete, get},
};
use todo_store::TodoStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: TodoStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health::health_check))
        .route("/todos", get(todo::list_todos).post(todo::create_todo))
        .route("/todos/:id", delete(todo::delete_todo))
}

/// Landing page.
async fn home<S: TodoStore>(State(state): State<Arc<AppState<S>>>) -> Html<String> {
    Html(state.landing_page.clone())
}
