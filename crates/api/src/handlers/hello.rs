//! Handlers for the hello-world person app.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use classroom_core::booking::validate_required;
use classroom_core::search::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use classroom_db::models::person::{CreatePerson, Person};
use classroom_db::repositories::PersonRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::PaginationParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PersonsPayload {
    pub persons: Vec<Person>,
}

#[derive(Serialize)]
pub struct PersonPayload {
    pub person: Person,
}

/// GET /hello
///
/// Plain-text greeting for the first stored person, or the world.
pub async fn greet(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let person = PersonRepo::first(&state.pool).await?;
    let name = person.map(|p| p.name).unwrap_or_else(|| "world".to_string());
    Ok(format!("Hello {name}"))
}

/// GET /hello/persons
pub async fn list_persons(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);
    let persons = PersonRepo::list(&state.pool, limit, offset).await?;

    Ok(Json(SuccessResponse::new(PersonsPayload { persons })))
}

/// POST /hello/persons
pub async fn create_person(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePerson>,
) -> AppResult<impl IntoResponse> {
    validate_required("name", &input.name)?;

    let person = PersonRepo::create(&state.pool, &input).await?;
    tracing::info!(person_id = person.id, "Person created");

    Ok(Json(SuccessResponse::new(PersonPayload { person })))
}
