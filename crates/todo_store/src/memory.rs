//! In-memory todo store implementation.

use async_trait::async_trait;
use entities::Task;
use tokio::sync::RwLock;

use crate::{StoreError, StoreResult, TodoStore};

/// In-memory todo store.
///
/// Tasks live in a lock-guarded vector owned by the store; nothing is
/// shared through globals. Ids come from a process-lifetime counter that is
/// never rewound, so a deleted id is not handed out again.
#[derive(Debug, Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    tasks: Vec<Task>,
    last_id: i64,
}

impl MemoryTodoStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn init(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.clone())
    }

    async fn create(&self, content: &str) -> StoreResult<Task> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let task = Task::new(inner.last_id, content);
        inner.tasks.push(task.clone());
        Ok(task)
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let before = inner.tasks.len();
        inner.tasks.retain(|task| task.id != id);
        if inner.tasks.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "in-memory"
    }
}
