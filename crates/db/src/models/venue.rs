//! Venue model and DTOs.

use classroom_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// A venue with its upcoming show count, used by listings and search.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    #[serde(skip)]
    pub city: String,
    #[serde(skip)]
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// DTO for listing a new venue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVenue {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
}

/// DTO for editing a venue. Only provided fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVenue {
    pub name: Option<String>,
    pub genres: Option<Vec<String>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: Option<bool>,
    pub seeking_description: Option<String>,
}
