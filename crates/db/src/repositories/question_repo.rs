//! Repository for the `questions` table.

use classroom_core::search::contains_pattern;
use classroom_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{NewQuestion, Question};

const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Provides CRUD, search and quiz queries for trivia questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Every question ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// Questions of one category ordered by id.
    pub async fn list_by_category(
        pool: &PgPool,
        category: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the question text.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE question ILIKE $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Total number of questions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Insert a question and return it with the new total, in one transaction.
    pub async fn create(
        pool: &PgPool,
        input: &NewQuestion,
    ) -> Result<(Question, i64), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(input.question.trim())
            .bind(input.answer.trim())
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(&mut *tx)
            .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((question, total))
    }

    /// Delete a question and return the remaining total, in one transaction.
    ///
    /// Returns `None` (and rolls back) if no question has that id.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<i64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(total))
    }

    /// Quiz candidates: every question, or only those of `category`.
    pub async fn quiz_pool(
        pool: &PgPool,
        category: Option<DbId>,
    ) -> Result<Vec<Question>, sqlx::Error> {
        match category {
            Some(category) => Self::list_by_category(pool, category).await,
            None => Self::list(pool).await,
        }
    }
}
