//! Handlers for Fyyur artists.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use classroom_core::booking::{
    partition_shows, validate_genres, validate_phone, validate_required, validate_state,
};
use classroom_core::error::CoreError;
use classroom_core::types::DbId;
use classroom_db::models::artist::{Artist, ArtistListItem, CreateArtist, UpdateArtist};
use classroom_db::models::show::{SearchTerm, VenueShow};
use classroom_db::repositories::{ArtistRepo, ShowRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::venues::SearchPayload;
use crate::response::{Deleted, SuccessResponse};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ArtistsPayload {
    pub artists: Vec<ArtistListItem>,
}

/// An artist with their shows split around the current time.
#[derive(Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Serialize)]
pub struct ArtistDetailPayload {
    pub artist: ArtistDetail,
}

#[derive(Serialize)]
pub struct ArtistPayload {
    pub artist: Artist,
}

fn artist_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

fn validate_create(input: &CreateArtist) -> Result<(), CoreError> {
    validate_required("name", &input.name)?;
    validate_required("city", &input.city)?;
    validate_state(&input.state)?;
    validate_genres(&input.genres)?;
    match input.phone.as_deref() {
        Some(p) if !p.is_empty() => validate_phone(p),
        _ => Ok(()),
    }
}

fn validate_update(input: &UpdateArtist) -> Result<(), CoreError> {
    if let Some(name) = &input.name {
        validate_required("name", name)?;
    }
    if let Some(city) = &input.city {
        validate_required("city", city)?;
    }
    if let Some(state) = &input.state {
        validate_state(state)?;
    }
    if let Some(genres) = &input.genres {
        validate_genres(genres)?;
    }
    match input.phone.as_deref() {
        Some(p) if !p.is_empty() => validate_phone(p),
        _ => Ok(()),
    }
}

/// GET /fyyur/artists
pub async fn list_artists(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(SuccessResponse::new(ArtistsPayload { artists })))
}

/// POST /fyyur/artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    AppJson(input): AppJson<SearchTerm>,
) -> AppResult<impl IntoResponse> {
    let data = ArtistRepo::search(&state.pool, &input.search_term).await?;

    tracing::debug!(term = %input.search_term, matches = data.len(), "Artist search");

    Ok(Json(SuccessResponse::new(SearchPayload {
        count: data.len(),
        data,
    })))
}

/// GET /fyyur/artists/{id}
pub async fn get_artist(
    State(state): State<AppState>,
    AppPath(artist_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let artist = ArtistRepo::find_by_id(&state.pool, artist_id)
        .await?
        .ok_or_else(|| artist_not_found(artist_id))?;

    let shows = ShowRepo::for_artist(&state.pool, artist_id).await?;
    let (past_shows, upcoming_shows) = partition_shows(shows, |s| s.start_time, Utc::now());

    Ok(Json(SuccessResponse::new(ArtistDetailPayload {
        artist: ArtistDetail {
            artist,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        },
    })))
}

/// POST /fyyur/artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateArtist>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input)?;

    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");

    Ok(Json(SuccessResponse::new(ArtistPayload { artist })))
}

/// POST /fyyur/artists/{id}/edit
pub async fn update_artist(
    State(state): State<AppState>,
    AppPath(artist_id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateArtist>,
) -> AppResult<impl IntoResponse> {
    validate_update(&input)?;

    let artist = ArtistRepo::update(&state.pool, artist_id, &input)
        .await?
        .ok_or_else(|| artist_not_found(artist_id))?;

    tracing::info!(artist_id, "Artist updated");

    Ok(Json(SuccessResponse::new(ArtistPayload { artist })))
}

/// DELETE /fyyur/artists/{id}
pub async fn delete_artist(
    State(state): State<AppState>,
    AppPath(artist_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ArtistRepo::delete(&state.pool, artist_id).await? {
        return Err(artist_not_found(artist_id));
    }

    tracing::info!(artist_id, "Artist deleted");

    Ok(Json(SuccessResponse::new(Deleted { deleted: artist_id })))
}
