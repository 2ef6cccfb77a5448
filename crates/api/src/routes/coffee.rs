use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::coffee;
use crate::state::AppState;

/// Routes mounted at `/coffee`.
///
/// ```text
/// GET    /                -> index                (public)
/// GET    /drinks          -> list_drinks          (public)
/// POST   /drinks          -> create_drink         (post:drinks)
/// GET    /drinks-detail   -> list_drinks_detail   (get:drinks-detail)
/// PATCH  /drinks/{id}     -> update_drink         (patch:drinks)
/// DELETE /drinks/{id}     -> delete_drink         (delete:drinks)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(coffee::index))
        .route(
            "/drinks",
            get(coffee::list_drinks).post(coffee::create_drink),
        )
        .route("/drinks-detail", get(coffee::list_drinks_detail))
        .route(
            "/drinks/{id}",
            patch(coffee::update_drink).delete(coffee::delete_drink),
        )
}
