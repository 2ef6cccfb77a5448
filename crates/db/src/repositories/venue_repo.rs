//! Repository for the `venues` table.

use classroom_core::search::contains_pattern;
use classroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::venue::{CreateVenue, UpdateVenue, Venue, VenueSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genres, city, state, address, phone, website, image_link, \
                       facebook_link, seeking_talent, seeking_description";

/// Summary projection with the number of shows starting after now.
const SUMMARY_COLUMNS: &str = "v.id, v.name, v.city, v.state, \
     (SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time > NOW()) \
     AS num_upcoming_shows";

/// Provides CRUD and search operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVenue) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues
                (name, genres, city, state, address, phone, website, image_link,
                 facebook_link, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, FALSE), $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(input.name.trim())
            .bind(&input.genres)
            .bind(input.city.trim())
            .bind(&input.state)
            .bind(input.address.trim())
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(pool)
            .await
    }

    /// Find a venue by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All venues with upcoming show counts, ordered so that venues of the
    /// same area are adjacent.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM venues v ORDER BY v.state, v.city, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the venue name.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM venues v WHERE v.name ILIKE $1 ORDER BY v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Update a venue. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVenue,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET
                name = COALESCE($2, name),
                genres = COALESCE($3, genres),
                city = COALESCE($4, city),
                state = COALESCE($5, state),
                address = COALESCE($6, address),
                phone = COALESCE($7, phone),
                website = COALESCE($8, website),
                image_link = COALESCE($9, image_link),
                facebook_link = COALESCE($10, facebook_link),
                seeking_talent = COALESCE($11, seeking_talent),
                seeking_description = COALESCE($12, seeking_description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.genres)
            .bind(input.city.as_deref().map(str::trim))
            .bind(&input.state)
            .bind(input.address.as_deref().map(str::trim))
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a venue; its shows cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
