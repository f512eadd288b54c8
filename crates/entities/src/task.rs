//! Task entity definition.

use serde::{Deserialize, Serialize};

/// A single item on the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the storage backend.
    pub id: i64,
    /// Task text. Bounded to 200 characters in database mode.
    pub content: String,
}

impl Task {
    /// Creates a task with the given id and content.
    pub fn new(id: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}
