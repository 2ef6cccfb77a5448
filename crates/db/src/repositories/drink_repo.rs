//! Repository for the `drinks` table.

use classroom_core::coffee::RecipePart;
use classroom_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::drink::Drink;

/// Provides CRUD operations for drinks.
pub struct DrinkRepo;

impl DrinkRepo {
    /// Every drink ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Drink>, sqlx::Error> {
        sqlx::query_as::<_, Drink>("SELECT id, title, recipe FROM drinks ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Insert a drink. A duplicate title violates `uq_drinks_title`.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        recipe: &[RecipePart],
    ) -> Result<Drink, sqlx::Error> {
        sqlx::query_as::<_, Drink>(
            "INSERT INTO drinks (title, recipe) VALUES ($1, $2) RETURNING id, title, recipe",
        )
        .bind(title.trim())
        .bind(Json(recipe))
        .fetch_one(pool)
        .await
    }

    /// Update a drink. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
        recipe: Option<&[RecipePart]>,
    ) -> Result<Option<Drink>, sqlx::Error> {
        sqlx::query_as::<_, Drink>(
            "UPDATE drinks SET
                title = COALESCE($2, title),
                recipe = COALESCE($3, recipe)
             WHERE id = $1
             RETURNING id, title, recipe",
        )
        .bind(id)
        .bind(title.map(str::trim))
        .bind(recipe.map(Json))
        .fetch_optional(pool)
        .await
    }

    /// Delete a drink. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
