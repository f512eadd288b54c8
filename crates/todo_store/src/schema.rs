//! Row types shared by the relational backends.

use entities::Task;
use sqlx::FromRow;

/// Database row for Task.
#[derive(Debug, FromRow)]
pub(crate) struct TaskRow {
    pub id: i64,
    pub content: String,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            content: row.content,
        }
    }
}
