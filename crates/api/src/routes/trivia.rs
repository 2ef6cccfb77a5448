use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::trivia;
use crate::state::AppState;

/// Routes mounted at `/trivia`.
///
/// ```text
/// GET    /categories                  -> list_categories
/// GET    /questions?page=N            -> list_questions
/// POST   /questions                   -> create_question
/// DELETE /questions/{id}              -> delete_question
/// POST   /search_question?page=N      -> search_questions
/// GET    /category/{id}/questions     -> questions_by_category
/// POST   /quizzes                     -> play_quiz
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(trivia::list_categories))
        .route(
            "/questions",
            get(trivia::list_questions).post(trivia::create_question),
        )
        .route("/questions/{id}", delete(trivia::delete_question))
        .route("/search_question", post(trivia::search_questions))
        .route(
            "/category/{id}/questions",
            get(trivia::questions_by_category),
        )
        .route("/quizzes", post(trivia::play_quiz))
}
