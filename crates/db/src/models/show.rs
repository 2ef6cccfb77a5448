//! Show model, DTOs and the joined projections used by listings.

use classroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub start_time: Timestamp,
    pub artist_id: DbId,
    pub venue_id: DbId,
}

/// A show joined with both its venue and its artist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show as seen from a venue page (the artist side).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArtistShow {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show as seen from an artist page (the venue side).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VenueShow {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// DTO for listing a show. `start_time` is parsed by the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: String,
}

/// Validated show ready for insertion.
#[derive(Debug, Clone)]
pub struct NewShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

/// Body of the venue and artist search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchTerm {
    #[serde(default)]
    pub search_term: String,
}
