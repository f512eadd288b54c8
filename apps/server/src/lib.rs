//! Todo Server
//!
//! A small task-list service exposing list/create/delete over HTTP/JSON,
//! backed by in-memory storage or a relational database selected from the
//! connection string at startup.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use std::sync::Arc;

use axum::Router;
use todo_store::TodoStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::state::AppState;

/// Creates the application router with all routes configured.
pub fn create_app<S: TodoStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use entities::Task;
    use serde_json::{Value, json};
    use todo_store::{MemoryTodoStore, StoreError, StoreResult, TodoStore};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::state::create_shared_state;

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: None,
            init_max_attempts: 1,
            init_retry_interval_secs: 0,
            log_level: "info".to_string(),
        }
    }

    fn memory_app() -> Router {
        let state = create_shared_state(test_config(), MemoryTodoStore::new()).unwrap();
        create_app(state)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn delete_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let app = memory_app();

        let response = app
            .clone()
            .oneshot(post_json("/todos", json!({"item": "buy milk"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"message": "Added", "item": {"id": 1, "content": "buy milk"}})
        );

        let response = app.oneshot(get_request("/todos")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([{"id": 1, "content": "buy milk"}])
        );
    }

    #[tokio::test]
    async fn test_create_without_item_is_rejected() {
        let app = memory_app();

        let response = app.oneshot(post_json("/todos", json!({}))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let app = memory_app();

        app.clone()
            .oneshot(post_json("/todos", json!({"item": "ephemeral"})))
            .await
            .unwrap();

        let response = app.clone().oneshot(delete_request("/todos/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"message": "Task deleted"}));

        let response = app.oneshot(delete_request("/todos/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Task not found"}));
    }

    #[tokio::test]
    async fn test_delete_missing_task_is_not_found() {
        let app = memory_app();

        let response = app.oneshot(delete_request("/todos/999")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Task not found"}));
    }

    #[tokio::test]
    async fn test_ids_survive_deletes() {
        let app = memory_app();

        for content in ["a", "b"] {
            app.clone()
                .oneshot(post_json("/todos", json!({"item": content})))
                .await
                .unwrap();
        }
        app.clone().oneshot(delete_request("/todos/2")).await.unwrap();

        let response = app
            .oneshot(post_json("/todos", json!({"item": "c"})))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["item"]["id"], json!(3));
    }

    #[tokio::test]
    async fn test_health_healthy_with_memory_store() {
        let app = memory_app();

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"status": "healthy", "storage": "in-memory"})
        );
    }

    /// Store that refuses every operation, standing in for an unreachable
    /// database.
    struct UnreachableStore;

    #[async_trait]
    impl TodoStore for UnreachableStore {
        async fn init(&self) -> StoreResult<()> {
            Err(StoreError::Other("connection refused".to_string()))
        }

        async fn list(&self) -> StoreResult<Vec<Task>> {
            Err(StoreError::Other("connection refused".to_string()))
        }

        async fn create(&self, _content: &str) -> StoreResult<Task> {
            Err(StoreError::Other("connection refused".to_string()))
        }

        async fn delete(&self, _id: i64) -> StoreResult<()> {
            Err(StoreError::Other("connection refused".to_string()))
        }

        async fn ping(&self) -> StoreResult<()> {
            Err(StoreError::Other("connection refused".to_string()))
        }

        fn backend(&self) -> &'static str {
            "unreachable"
        }
    }

    #[tokio::test]
    async fn test_health_unhealthy_when_storage_is_down() {
        let state = create_shared_state(test_config(), UnreachableStore).unwrap();
        let app = create_app(state);

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["status"], json!("unhealthy"));
        assert_eq!(body["error"], json!("connection refused"));
    }

    #[tokio::test]
    async fn test_list_errors_map_to_500() {
        let state = create_shared_state(test_config(), UnreachableStore).unwrap();
        let app = create_app(state);

        let response = app.oneshot(get_request("/todos")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_home_serves_landing_page() {
        let app = memory_app();

        let response = app.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("in-memory"));
    }
}
