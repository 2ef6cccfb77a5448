//! Repository for the `artists` table.

use classroom_core::search::contains_pattern;
use classroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::artist::{Artist, ArtistListItem, ArtistSummary, CreateArtist, UpdateArtist};

const COLUMNS: &str = "id, name, genres, city, state, phone, website, image_link, \
                       facebook_link, seeking_venue, seeking_description";

/// Provides CRUD and search operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists
                (name, genres, city, state, phone, website, image_link,
                 facebook_link, seeking_venue, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, FALSE), $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(input.name.trim())
            .bind(&input.genres)
            .bind(input.city.trim())
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every artist's id and name, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<ArtistListItem>, sqlx::Error> {
        sqlx::query_as::<_, ArtistListItem>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the artist name.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<ArtistSummary>, sqlx::Error> {
        sqlx::query_as::<_, ArtistSummary>(
            "SELECT a.id, a.name,
                (SELECT COUNT(*) FROM shows s WHERE s.artist_id = a.id AND s.start_time > NOW())
                AS num_upcoming_shows
             FROM artists a
             WHERE a.name ILIKE $1
             ORDER BY a.id",
        )
        .bind(contains_pattern(term))
        .fetch_all(pool)
        .await
    }

    /// Update an artist. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = COALESCE($2, name),
                genres = COALESCE($3, genres),
                city = COALESCE($4, city),
                state = COALESCE($5, state),
                phone = COALESCE($6, phone),
                website = COALESCE($7, website),
                image_link = COALESCE($8, image_link),
                facebook_link = COALESCE($9, facebook_link),
                seeking_venue = COALESCE($10, seeking_venue),
                seeking_description = COALESCE($11, seeking_description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.genres)
            .bind(input.city.as_deref().map(str::trim))
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist; their shows cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
