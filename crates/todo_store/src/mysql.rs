//! MySQL todo store implementation.

use async_trait::async_trait;
use entities::Task;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;

use crate::schema::TaskRow;
use crate::{StoreError, StoreResult, TodoStore};

/// MySQL-backed todo store.
#[derive(Debug, Clone)]
pub struct MySqlTodoStore {
    pool: MySqlPool,
}

impl MySqlTodoStore {
    /// Creates a store over a lazy connection pool.
    pub fn connect_lazy(url: &str) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect_lazy(url)?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoStore for MySqlTodoStore {
    async fn init(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
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
        // MySQL has no INSERT ... RETURNING; read the generated key back.
        let result = sqlx::query("INSERT INTO todos (content) VALUES (?)")
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(Task::new(result.last_insert_id() as i64, content))
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
        "mysql"
    }
}
