//! Handlers for Fyyur venues.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use classroom_core::booking::{
    group_by_area, partition_shows, validate_genres, validate_phone, validate_required,
    validate_state,
};
use classroom_core::error::CoreError;
use classroom_core::types::DbId;
use classroom_db::models::show::{ArtistShow, SearchTerm};
use classroom_db::models::venue::{CreateVenue, UpdateVenue, Venue, VenueSummary};
use classroom_db::repositories::{ShowRepo, VenueRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::{Deleted, SuccessResponse};
use crate::state::AppState;

/// Venues sharing one `(city, state)`.
#[derive(Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Serialize)]
pub struct AreasPayload {
    pub areas: Vec<VenueArea>,
}

#[derive(Serialize)]
pub struct SearchPayload<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}

/// A venue with its shows split around the current time.
#[derive(Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Serialize)]
pub struct VenueDetailPayload {
    pub venue: VenueDetail,
}

#[derive(Serialize)]
pub struct VenuePayload {
    pub venue: Venue,
}

fn venue_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

fn validate_optional_phone(phone: Option<&str>) -> Result<(), CoreError> {
    match phone {
        Some(p) if !p.is_empty() => validate_phone(p),
        _ => Ok(()),
    }
}

fn validate_create(input: &CreateVenue) -> Result<(), CoreError> {
    validate_required("name", &input.name)?;
    validate_required("city", &input.city)?;
    validate_required("address", &input.address)?;
    validate_state(&input.state)?;
    validate_genres(&input.genres)?;
    validate_optional_phone(input.phone.as_deref())
}

fn validate_update(input: &UpdateVenue) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        validate_required("name", name)?;
    }
    if let Some(city) = &input.city {
        validate_required("city", city)?;
    }
    if let Some(address) = &input.address {
        validate_required("address", address)?;
    }
    if let Some(state) = &input.state {
        validate_state(state)?;
    }
    if let Some(genres) = &input.genres {
        validate_genres(genres)?;
    }
    validate_optional_phone(input.phone.as_deref())
}

/// GET /fyyur/venues
///
/// Every venue grouped by area, each with its number of upcoming shows.
pub async fn list_venues(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let summaries = VenueRepo::list_summaries(&state.pool).await?;

    let areas = group_by_area(summaries, |v| (v.city.clone(), v.state.clone()))
        .into_iter()
        .map(|area| VenueArea {
            city: area.city,
            state: area.state,
            venues: area.items,
        })
        .collect();

    Ok(Json(SuccessResponse::new(AreasPayload { areas })))
}

/// POST /fyyur/venues/search
///
/// Case-insensitive substring match on the venue name.
pub async fn search_venues(
    State(state): State<AppState>,
    AppJson(input): AppJson<SearchTerm>,
) -> AppResult<impl IntoResponse> {
    let data = VenueRepo::search(&state.pool, &input.search_term).await?;

    tracing::debug!(term = %input.search_term, matches = data.len(), "Venue search");

    Ok(Json(SuccessResponse::new(SearchPayload {
        count: data.len(),
        data,
    })))
}

/// GET /fyyur/venues/{id}
pub async fn get_venue(
    State(state): State<AppState>,
    AppPath(venue_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let venue = VenueRepo::find_by_id(&state.pool, venue_id)
        .await?
        .ok_or_else(|| venue_not_found(venue_id))?;

    let shows = ShowRepo::for_venue(&state.pool, venue_id).await?;
    let (past_shows, upcoming_shows) = partition_shows(shows, |s| s.start_time, Utc::now());

    Ok(Json(SuccessResponse::new(VenueDetailPayload {
        venue: VenueDetail {
            venue,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        },
    })))
}

/// POST /fyyur/venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateVenue>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let venue = VenueRepo::create(&state.pool, &input).await?;
    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");

    Ok(Json(SuccessResponse::new(VenuePayload { venue })))
}

/// POST /fyyur/venues/{id}/edit
///
/// Only the fields present in the body change.
pub async fn update_venue(
    State(state): State<AppState>,
    AppPath(venue_id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateVenue>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input)?;

    let venue = VenueRepo::update(&state.pool, venue_id, &input)
        .await?
        .ok_or_else(|| venue_not_found(venue_id))?;

    tracing::info!(venue_id, "Venue updated");

    Ok(Json(SuccessResponse::new(VenuePayload { venue })))
}

/// DELETE /fyyur/venues/{id}
///
/// The venue's shows are deleted with it.
pub async fn delete_venue(
    State(state): State<AppState>,
    AppPath(venue_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !VenueRepo::delete(&state.pool, venue_id).await? {
        return Err(venue_not_found(venue_id));
    }

    tracing::info!(venue_id, "Venue deleted");

    Ok(Json(SuccessResponse::new(Deleted { deleted: venue_id })))
}
