//! Handlers for the todo app: lists and the items inside them.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use classroom_core::booking::validate_required;
use classroom_core::error::CoreError;
use classroom_core::types::DbId;
use classroom_db::models::todo::{CreateTodo, CreateTodoList, SetCompleted, Todo, TodoList};
use classroom_db::repositories::{TodoListRepo, TodoRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Deleted, SuccessResponse};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ListsPayload {
    pub lists: Vec<TodoList>,
}

#[derive(Serialize)]
pub struct ListPayload {
    pub list: TodoList,
}

#[derive(Serialize)]
pub struct ListDetailPayload {
    pub list: TodoList,
    pub todos: Vec<Todo>,
}

#[derive(Serialize)]
pub struct UpdatedPayload {
    pub updated: u64,
}

#[derive(Serialize)]
pub struct TodoPayload {
    pub todo: Todo,
}

fn list_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "TodoList",
        id,
    })
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

/// GET /todo/lists
pub async fn list_lists(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let lists = TodoListRepo::list(&state.pool).await?;
    Ok(Json(SuccessResponse::new(ListsPayload { lists })))
}

/// POST /todo/lists/create
pub async fn create_list(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTodoList>,
) -> AppResult<impl IntoResponse> {
    validate_required("name", &input.name)?;

    let list = TodoListRepo::create(&state.pool, &input).await?;
    tracing::info!(list_id = list.id, "Todo list created");

    Ok(Json(SuccessResponse::new(ListPayload { list })))
}

/// GET /todo/lists/{id}
///
/// The list together with its todos, oldest first.
pub async fn get_list(
    State(state): State<AppState>,
    AppPath(list_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let list = TodoListRepo::find_by_id(&state.pool, list_id)
        .await?
        .ok_or_else(|| list_not_found(list_id))?;
    let todos = TodoRepo::list_by_list(&state.pool, list_id).await?;

    Ok(Json(SuccessResponse::new(ListDetailPayload { list, todos })))
}

/// POST /todo/lists/{id}/set-completed
///
/// Mark every todo of the list as completed.
pub async fn complete_list(
    State(state): State<AppState>,
    AppPath(list_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let updated = TodoListRepo::complete_all(&state.pool, list_id)
        .await?
        .ok_or_else(|| list_not_found(list_id))?;

    tracing::info!(list_id, updated, "Todo list completed");

    Ok(Json(SuccessResponse::new(UpdatedPayload { updated })))
}

/// DELETE /todo/lists/{id}
///
/// Deletes the list; its todos go with it.
pub async fn delete_list(
    State(state): State<AppState>,
    AppPath(list_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TodoListRepo::delete(&state.pool, list_id).await? {
        return Err(list_not_found(list_id));
    }

    tracing::info!(list_id, "Todo list deleted");

    Ok(Json(SuccessResponse::new(Deleted { deleted: list_id })))
}

// ---------------------------------------------------------------------------
// Todos
// ---------------------------------------------------------------------------

/// POST /todo/todos/create
///
/// An unknown `list_id` trips the foreign key and comes back as 422.
pub async fn create_todo(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    validate_required("description", &input.description)?;

    let todo = TodoRepo::create(&state.pool, &input).await?;
    tracing::info!(todo_id = todo.id, list_id = todo.list_id, "Todo created");

    Ok(Json(SuccessResponse::new(TodoPayload { todo })))
}

/// POST /todo/todos/{id}/set-completed
pub async fn set_todo_completed(
    State(state): State<AppState>,
    AppPath(todo_id): AppPath<DbId>,
    AppJson(input): AppJson<SetCompleted>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::set_completed(&state.pool, todo_id, input.completed)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Todo",
            id: todo_id,
        }))?;

    tracing::info!(todo_id, completed = todo.completed, "Todo updated");

    Ok(Json(SuccessResponse::new(TodoPayload { todo })))
}

/// DELETE /todo/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    AppPath(todo_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TodoRepo::delete(&state.pool, todo_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Todo",
            id: todo_id,
        }));
    }

    tracing::info!(todo_id, "Todo deleted");

    Ok(Json(SuccessResponse::new(Deleted { deleted: todo_id })))
}
