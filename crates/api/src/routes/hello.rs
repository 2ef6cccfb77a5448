use axum::routing::get;
use axum::Router;

use crate::handlers::hello;
use crate::state::AppState;

/// Routes mounted at `/hello`.
///
/// ```text
/// GET    /          -> greet
/// GET    /persons   -> list_persons
/// POST   /persons   -> create_person
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(hello::greet))
        .route(
            "/persons",
            get(hello::list_persons).post(hello::create_person),
        )
}
