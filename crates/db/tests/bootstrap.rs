use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema and seed rows.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    classroom_db::health_check(&pool).await.unwrap();

    let tables = [
        "persons",
        "todo_lists",
        "todos",
        "venues",
        "artists",
        "shows",
        "categories",
        "questions",
        "drinks",
    ];

    for table in tables {
        sqlx::query(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
    }

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 6, "six trivia categories are seeded");
}

/// Difficulty outside 1..=5 is rejected by the CHECK constraint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_question_difficulty_check(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES ('q', 'a', 1, 9)",
    )
    .execute(&pool)
    .await;

    let err = result.expect_err("difficulty 9 must be rejected");
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}
