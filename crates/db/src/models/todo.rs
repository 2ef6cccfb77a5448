//! Todo list and todo item models.

use classroom_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `todo_lists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TodoList {
    pub id: DbId,
    pub name: String,
}

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub description: String,
    pub completed: bool,
    pub list_id: DbId,
}

/// DTO for creating a todo list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoList {
    pub name: String,
}

/// DTO for creating a todo inside an existing list.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub description: String,
    pub list_id: DbId,
}

/// DTO for toggling completion.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCompleted {
    pub completed: bool,
}
