pub mod group;
pub mod models;
pub mod quiz;

use std::fmt;

use sqlx::SqlitePool;

pub use models::{Group, Quiz};

pub type DbResult<T> = Result<T, DbError>;

/// Persistence-layer failures, tagged so handlers can branch on the kind
/// instead of inspecting error text.
#[derive(Debug)]
pub enum DbError {
    /// User-correctable field errors, one message per failed rule.
    Validation(Vec<String>),
    NotFound(String),
    Sqlx(sqlx::Error),
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbError::Validation(errors) => write!(f, "validation failed: {}", errors.join("; ")),
            DbError::NotFound(message) => write!(f, "{message}"),
            DbError::Sqlx(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DbError::Sqlx(err) => Some(err),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        DbError::Sqlx(err)
    }
}

pub async fn create_schema(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS groups (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quizzes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS group_quizzes (
            group_id INTEGER NOT NULL,
            quiz_id INTEGER NOT NULL,
            UNIQUE(group_id, quiz_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("database schema is ready");

    Ok(())
}
