//! Repository for the `shows` table and its venue/artist joins.

use classroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::show::{ArtistShow, NewShow, Show, ShowListing, VenueShow};

/// Provides queries for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a show. Fails with a foreign-key violation if the artist or
    /// venue does not exist.
    pub async fn create(pool: &PgPool, input: &NewShow) -> Result<Show, sqlx::Error> {
        sqlx::query_as::<_, Show>(
            "INSERT INTO shows (start_time, artist_id, venue_id)
             VALUES ($1, $2, $3)
             RETURNING id, start_time, artist_id, venue_id",
        )
        .bind(input.start_time)
        .bind(input.artist_id)
        .bind(input.venue_id)
        .fetch_one(pool)
        .await
    }

    /// Every show joined with its venue and artist, ordered by start time.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.venue_id, v.name AS venue_name,
                    s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Shows at one venue with the performing artist, ordered by start time.
    pub async fn for_venue(pool: &PgPool, venue_id: DbId) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time, s.id",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Shows of one artist with the hosting venue, ordered by start time.
    pub async fn for_artist(pool: &PgPool, artist_id: DbId) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time, s.id",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }
}
