//! Handlers for Fyyur shows.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use classroom_core::booking::parse_start_time;
use classroom_db::models::show::{CreateShow, NewShow, Show, ShowListing};
use classroom_db::repositories::ShowRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::SuccessResponse;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ShowsPayload {
    pub shows: Vec<ShowListing>,
}

#[derive(Serialize)]
pub struct ShowPayload {
    pub show: Show,
}

/// GET /fyyur/shows
///
/// Every show joined with its venue and artist, soonest first.
pub async fn list_shows(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let shows = ShowRepo::list_all(&state.pool).await?;
    Ok(Json(SuccessResponse::new(ShowsPayload { shows })))
}

/// POST /fyyur/shows/create
///
/// Unknown artist or venue ids trip a foreign key and come back as 422.
pub async fn create_show(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateShow>,
) -> AppResult<impl IntoResponse> {
    let start_time = parse_start_time(&input.start_time)?;

    let show = ShowRepo::create(
        &state.pool,
        &NewShow {
            artist_id: input.artist_id,
            venue_id: input.venue_id,
            start_time,
        },
    )
    .await?;

    tracing::info!(
        show_id = show.id,
        artist_id = show.artist_id,
        venue_id = show.venue_id,
        "Show listed",
    );

    Ok(Json(SuccessResponse::new(ShowPayload { show })))
}
