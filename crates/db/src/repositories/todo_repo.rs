//! Repositories for the `todo_lists` and `todos` tables.

use classroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::todo::{CreateTodo, CreateTodoList, Todo, TodoList};

const TODO_COLUMNS: &str = "id, description, completed, list_id";

/// Provides CRUD operations for todo lists.
pub struct TodoListRepo;

impl TodoListRepo {
    pub async fn create(pool: &PgPool, input: &CreateTodoList) -> Result<TodoList, sqlx::Error> {
        sqlx::query_as::<_, TodoList>(
            "INSERT INTO todo_lists (name) VALUES ($1) RETURNING id, name",
        )
        .bind(input.name.trim())
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TodoList>, sqlx::Error> {
        sqlx::query_as::<_, TodoList>("SELECT id, name FROM todo_lists WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<TodoList>, sqlx::Error> {
        sqlx::query_as::<_, TodoList>("SELECT id, name FROM todo_lists ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Mark every todo in the list as completed.
    ///
    /// Returns `None` if the list does not exist, otherwise the number of
    /// todos touched.
    pub async fn complete_all(pool: &PgPool, id: DbId) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM todo_lists WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let result = sqlx::query("UPDATE todos SET completed = TRUE WHERE list_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(result.rows_affected()))
    }

    /// Delete a list; its todos cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo_lists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Provides CRUD operations for todo items.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a todo. Fails with a foreign-key violation if the list is unknown.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (description, list_id) VALUES ($1, $2) RETURNING {TODO_COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(input.description.trim())
            .bind(input.list_id)
            .fetch_one(pool)
            .await
    }

    /// Todos of one list ordered by id.
    pub async fn list_by_list(pool: &PgPool, list_id: DbId) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {TODO_COLUMNS} FROM todos WHERE list_id = $1 ORDER BY id");
        sqlx::query_as::<_, Todo>(&query)
            .bind(list_id)
            .fetch_all(pool)
            .await
    }

    /// Set the completion flag. Returns `None` if no todo has that id.
    pub async fn set_completed(
        pool: &PgPool,
        id: DbId,
        completed: bool,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query =
            format!("UPDATE todos SET completed = $2 WHERE id = $1 RETURNING {TODO_COLUMNS}");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(completed)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
