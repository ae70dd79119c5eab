use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{Todo, TodoInput};

/// Plain CRUD store for Todo records. No filtering, no ownership scoping.
pub struct TodoStore {
    pool: PgPool,
}

impl TodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: TodoInput) -> Result<Todo, AppError> {
        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (title, is_completed) VALUES ($1, $2) \
             RETURNING id, title, is_completed",
        )
        .bind(input.title)
        .bind(input.is_completed)
        .fetch_one(&self.pool)
        .await?;

        Ok(todo)
    }

    pub async fn find_all(&self) -> Result<Vec<Todo>, AppError> {
        let todos =
            sqlx::query_as::<_, Todo>("SELECT id, title, is_completed FROM todos ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(todos)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError> {
        let todo =
            sqlx::query_as::<_, Todo>("SELECT id, title, is_completed FROM todos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(todo)
    }

    /// Updates a record in place. Returns `None` when no record has the id.
    pub async fn update(&self, id: i64, input: TodoInput) -> Result<Option<Todo>, AppError> {
        let todo = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET title = $1, is_completed = $2 WHERE id = $3 \
             RETURNING id, title, is_completed",
        )
        .bind(input.title)
        .bind(input.is_completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    /// Deletes a record. Returns whether anything was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
