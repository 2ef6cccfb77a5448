//! Repository for the `persons` table.

use sqlx::PgPool;

use crate::models::person::{CreatePerson, Person};

/// Provides queries for persons.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePerson) -> Result<Person, sqlx::Error> {
        sqlx::query_as::<_, Person>("INSERT INTO persons (name) VALUES ($1) RETURNING id, name")
            .bind(input.name.trim())
            .fetch_one(pool)
            .await
    }

    /// The person with the lowest id, if any.
    pub async fn first(pool: &PgPool) -> Result<Option<Person>, sqlx::Error> {
        sqlx::query_as::<_, Person>("SELECT id, name FROM persons ORDER BY id LIMIT 1")
            .fetch_optional(pool)
            .await
    }

    /// List persons ordered by id, bounded by `limit` / `offset`.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Person>, sqlx::Error> {
        sqlx::query_as::<_, Person>("SELECT id, name FROM persons ORDER BY id LIMIT $1 OFFSET $2")
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
