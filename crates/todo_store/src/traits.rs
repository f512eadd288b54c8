//! Todo store trait definition.

use async_trait::async_trait;
use entities::Task;

use crate::StoreResult;

/// Trait for task storage operations.
///
/// One implementation exists per backend; the backend is selected once at
/// configuration time and never changes for the lifetime of the process.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Creates the backing schema if it does not exist yet.
    async fn init(&self) -> StoreResult<()>;

    /// Returns all tasks in storage order.
    async fn list(&self) -> StoreResult<Vec<Task>>;

    /// Persists a new task and returns it with its assigned id.
    async fn create(&self, content: &str) -> StoreResult<Task>;

    /// Removes the task with the given id.
    ///
    /// Returns `StoreError::NotFound` when no task matched.
    async fn delete(&self, id: i64) -> StoreResult<()>;

    /// Round-trips a trivial query to verify the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;

    /// Backend label reported by the health endpoint.
    fn backend(&self) -> &'static str;
}
