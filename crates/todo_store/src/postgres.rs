//! PostgreSQL todo store implementation.

use async_trait::async_trait;
use entities::Task;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::schema::TaskRow;
use crate::{StoreError, StoreResult, TodoStore};

/// PostgreSQL-backed todo store.
#[derive(Debug, Clone)]
pub struct PostgresTodoStore {
    pool: PgPool,
}

impl PostgresTodoStore {
    /// Creates a store over a lazy connection pool.
    ///
    /// No connection is attempted here; the schema-initialization retry
    /// loop establishes the first one, so the server can bind its port
    /// while the database is still coming up.
    pub fn connect_lazy(url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new().max_connections(5).connect_lazy(url)?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoStore for PostgresTodoStore {
    async fn init(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id BIGSERIAL PRIMARY KEY,
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
            sqlx::query_as("INSERT INTO todos (content) VALUES ($1) RETURNING id, content")
                .bind(content)
                .fetch_one(&self.pool)
                .await?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
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
        "postgres"
    }
}
