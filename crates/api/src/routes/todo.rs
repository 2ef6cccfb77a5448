use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Routes mounted at `/todo`.
///
/// ```text
/// GET    /lists                       -> list_lists
/// POST   /lists/create                -> create_list
/// GET    /lists/{id}                  -> get_list
/// DELETE /lists/{id}                  -> delete_list
/// POST   /lists/{id}/set-completed    -> complete_list
/// POST   /todos/create                -> create_todo
/// POST   /todos/{id}/set-completed    -> set_todo_completed
/// DELETE /todos/{id}                  -> delete_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lists", get(todo::list_lists))
        .route("/lists/create", post(todo::create_list))
        .route("/lists/{id}", get(todo::get_list).delete(todo::delete_list))
        .route("/lists/{id}/set-completed", post(todo::complete_list))
        .route("/todos/create", post(todo::create_todo))
        .route("/todos/{id}/set-completed", post(todo::set_todo_completed))
        .route("/todos/{id}", delete(todo::delete_todo))
}
