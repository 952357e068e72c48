use axum::{
    debug_handler,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use rand::Rng;
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use super::LoadQuiz;
use crate::{db, include_res, session::RandomPlay, AppResult};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn random_play(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let mut play = RandomPlay::load_or_init(&session).await?;

    let quiz = if play.last_quiz_id != 0 {
        // A quiz is still pending from an earlier presentation (e.g. the
        // user came back after a wrong answer elsewhere); show it again.
        db::quiz::find_opt(&db_pool, play.last_quiz_id).await?
    } else {
        let total = db::quiz::count(&db_pool).await?;
        let remaining = total - play.resolved.len() as i64;

        if remaining > 0 {
            let offset = rand::rng().random_range(0..remaining);
            db::quiz::pick_excluding(&db_pool, &play.resolved, offset).await?
        } else {
            None
        }
    };

    let score = play.score();

    if let Some(quiz) = quiz {
        play.last_quiz_id = quiz.id;
        play.save(&session).await?;

        let body = include_res!(str, "/pages/groups/random_play.html")
            .replace("{quiz_id}", &quiz.id.to_string())
            .replace("{question}", &quiz.question)
            .replace("{score}", &score.to_string());
        Ok(Html(body).into_response())
    } else {
        RandomPlay::clear(&session).await?;

        let body = include_res!(str, "/pages/groups/random_nomore.html")
            .replace("{score}", &score.to_string());
        Ok(Html(body).into_response())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckQuery {
    #[serde(default)]
    answer: String,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn random_check(
    session: Session,
    LoadQuiz(quiz): LoadQuiz,
    Query(CheckQuery { answer }): Query<CheckQuery>,
) -> AppResult<Response> {
    let mut play = RandomPlay::load_or_init(&session).await?;

    let result = answer.trim().to_lowercase() == quiz.answer.trim().to_lowercase();
    let mut score = play.score();

    if result {
        play.resolve(quiz.id);
        score = play.score();
        play.save(&session).await?;
    } else {
        // A wrong answer ends the streak.
        RandomPlay::clear(&session).await?;
    }

    let body = include_res!(str, "/pages/groups/random_result.html")
        .replace("{result}", if result { "Correct" } else { "Incorrect" })
        .replace("{answer}", &answer)
        .replace("{score}", &score.to_string());
    Ok(Html(body).into_response())
}
