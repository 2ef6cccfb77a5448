//! Artist model and DTOs.

use classroom_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Minimal artist info for the artists index.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistListItem {
    pub id: DbId,
    pub name: String,
}

/// An artist with its upcoming show count, used by search.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistSummary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// DTO for listing a new artist.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}

/// DTO for editing an artist. Only provided fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArtist {
    pub name: Option<String>,
    pub genres: Option<Vec<String>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: Option<bool>,
    pub seeking_description: Option<String>,
}
