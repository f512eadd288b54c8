//! SQLite todo store implementation.

use async_trait::async_trait;
use entities::Task;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use crate::schema::TaskRow;
use crate::{StoreError, StoreResult, TodoStore};

/// SQLite-backed todo store.
///
/// Used for local single-process deployments, e.g.
/// `DATABASE_URL=sqlite:todos.db?mode=rwc`.
#[derive(Debug, Clone)]
pub struct SqliteTodoStore {
    pool: SqlitePool,
}

impl SqliteTodoStore {
    /// Creates a store over a lazy connection pool.
    pub fn connect_lazy(url: &str) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_lazy(url)?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoStore for SqliteTodoStore {
    async fn init(&self) -> StoreResult<()> {
        // AUTOINCREMENT keeps deleted ids from ever being reassigned.
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                content VARCHAR(200) NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<Task>> {
        let rows: Vec<TaskRow> = sqlx::query_as("SELECT id, content FROM todos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn create(&self, content: &str) -> StoreResult<Task> {
        let row: TaskRow =
            sqlx::query_as("INSERT INTO todos (content) VALUES (?) RETURNING id, content")
                .bind(content)
                .fetch_one(&self.pool)
                .await?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
