use sqlx::SqlitePool;

use super::{DbError, DbResult, Quiz};

pub async fn all(pool: &SqlitePool) -> DbResult<Vec<Quiz>> {
    Ok(
        sqlx::query_as::<_, Quiz>("SELECT id,question,answer FROM quizzes ORDER BY id")
            .fetch_all(pool)
            .await?,
    )
}

pub async fn find(pool: &SqlitePool, quiz_id: i64) -> DbResult<Quiz> {
    find_opt(pool, quiz_id)
        .await?
        .ok_or_else(|| DbError::NotFound(format!("There is no quiz with id={quiz_id}")))
}

pub async fn find_opt(pool: &SqlitePool, quiz_id: i64) -> DbResult<Option<Quiz>> {
    Ok(
        sqlx::query_as::<_, Quiz>("SELECT id,question,answer FROM quizzes WHERE id=?")
            .bind(quiz_id)
            .fetch_optional(pool)
            .await?,
    )
}

pub async fn count(pool: &SqlitePool) -> DbResult<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quizzes")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// The quiz at `offset` into the id-ordered set of quizzes whose id is not
/// in `excluded`, or None when the offset runs past the end.
pub async fn pick_excluding(
    pool: &SqlitePool,
    excluded: &[i64],
    offset: i64,
) -> DbResult<Option<Quiz>> {
    // The excluded ids are integers from our own rows, so interpolating them
    // is safe; sqlite cannot bind a list.
    let sql = if excluded.is_empty() {
        "SELECT id,question,answer FROM quizzes ORDER BY id LIMIT 1 OFFSET ?".to_owned()
    } else {
        let ids = excluded
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("SELECT id,question,answer FROM quizzes WHERE id NOT IN ({ids}) ORDER BY id LIMIT 1 OFFSET ?")
    };

    Ok(sqlx::query_as::<_, Quiz>(&sql)
        .bind(offset)
        .fetch_optional(pool)
        .await?)
}

pub async fn create(pool: &SqlitePool, question: &str, answer: &str) -> DbResult<Quiz> {
    let result = sqlx::query("INSERT INTO quizzes (question,answer) VALUES (?,?)")
        .bind(question)
        .bind(answer)
        .execute(pool)
        .await?;

    Ok(Quiz {
        id: result.last_insert_rowid(),
        question: question.to_owned(),
        answer: answer.to_owned(),
    })
}
