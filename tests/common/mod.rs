use quizgroups::db;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub async fn create_test_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    db::create_schema(&pool)
        .await
        .expect("failed to create schema");

    pool
}

pub async fn seed_quizzes(pool: &SqlitePool, pairs: &[(&str, &str)]) -> Vec<i64> {
    let mut ids = Vec::new();
    for (question, answer) in pairs {
        let quiz = db::quiz::create(pool, question, answer)
            .await
            .expect("failed to seed quiz");
        ids.push(quiz.id);
    }
    ids
}
