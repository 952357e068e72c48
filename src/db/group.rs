use sqlx::SqlitePool;

use super::{DbError, DbResult, Group};

pub async fn all(pool: &SqlitePool) -> DbResult<Vec<Group>> {
    Ok(
        sqlx::query_as::<_, Group>("SELECT id,name FROM groups ORDER BY id")
            .fetch_all(pool)
            .await?,
    )
}

pub async fn find(pool: &SqlitePool, group_id: i64) -> DbResult<Group> {
    sqlx::query_as::<_, Group>("SELECT id,name FROM groups WHERE id=?")
        .bind(group_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DbError::NotFound(format!("There is no group with id={group_id}")))
}

/// Persists only the name field.
pub async fn create(pool: &SqlitePool, name: &str) -> DbResult<Group> {
    validate_name(name)?;

    let result = sqlx::query("INSERT INTO groups (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await?;

    Ok(Group {
        id: result.last_insert_rowid(),
        name: name.to_owned(),
    })
}

/// Renames the group and replaces its quiz set with `quiz_ids` (full-replace
/// semantics). Both statements run in one transaction, so a failure leaves
/// the previous name and associations intact.
pub async fn update(
    pool: &SqlitePool,
    group_id: i64,
    name: &str,
    quiz_ids: &[i64],
) -> DbResult<()> {
    validate_name(name)?;

    let mut tx = pool.begin().await?;

    let result = sqlx::query("UPDATE groups SET name=? WHERE id=?")
        .bind(name)
        .bind(group_id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        return Err(DbError::NotFound(format!(
            "There is no group with id={group_id}"
        )));
    }

    sqlx::query("DELETE FROM group_quizzes WHERE group_id=?")
        .bind(group_id)
        .execute(&mut *tx)
        .await?;
    for quiz_id in quiz_ids {
        sqlx::query("INSERT OR IGNORE INTO group_quizzes (group_id,quiz_id) VALUES (?,?)")
            .bind(group_id)
            .bind(quiz_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Quiz ids associated with the group, in association-query order.
pub async fn quiz_ids(pool: &SqlitePool, group_id: i64) -> DbResult<Vec<i64>> {
    let rows: Vec<(i64,)> =
        sqlx::query_as("SELECT quiz_id FROM group_quizzes WHERE group_id=? ORDER BY quiz_id")
            .bind(group_id)
            .fetch_all(pool)
            .await?;

    Ok(rows.into_iter().map(|(id,)| id).collect())
}

/// Deletes the group and its association rows.
pub async fn delete(pool: &SqlitePool, group_id: i64) -> DbResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM group_quizzes WHERE group_id=?")
        .bind(group_id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM groups WHERE id=?")
        .bind(group_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

fn validate_name(name: &str) -> DbResult<()> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push("Name must not be empty.".to_owned());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(DbError::Validation(errors))
    }
}
