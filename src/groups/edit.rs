use axum::{
    debug_handler,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use super::LoadGroup;
use crate::{db, db::DbError, flash, include_res, AppResult};

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateGroupForm {
    name: String,
    #[serde(default)]
    quizzes_ids: Vec<i64>,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn edit_group_page(
    State(db_pool): State<SqlitePool>,
    session: Session,
    LoadGroup(group): LoadGroup,
) -> AppResult<Response> {
    render_edit(&db_pool, &session, &group).await
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn update_group(
    State(db_pool): State<SqlitePool>,
    session: Session,
    LoadGroup(mut group): LoadGroup,
    Form(UpdateGroupForm { name, quizzes_ids }): Form<UpdateGroupForm>,
) -> AppResult<Response> {
    group.name = name.trim().to_owned();

    match db::group::update(&db_pool, group.id, &group.name, &quizzes_ids).await {
        Ok(()) => {
            flash::success(&session, "group edited successfully.").await?;
            Ok(Redirect::to("/groups").into_response())
        }
        Err(DbError::Validation(errors)) => {
            flash::error(&session, "There are errors in the form:").await?;
            for message in &errors {
                flash::error(&session, message).await?;
            }
            render_edit(&db_pool, &session, &group).await
        }
        Err(err) => {
            flash::error(&session, &format!("Error editing the group: {err}")).await?;
            Err(err.into())
        }
    }
}

async fn render_edit(
    db_pool: &SqlitePool,
    session: &Session,
    group: &db::Group,
) -> AppResult<Response> {
    let all_quizzes = db::quiz::all(db_pool).await?;
    let group_quizzes_ids = db::group::quiz_ids(db_pool, group.id).await?;

    let mut checkboxes = String::new();
    for quiz in &all_quizzes {
        checkboxes += &include_res!(str, "/pages/groups/quiz_checkbox.html")
            .replace("{id}", &quiz.id.to_string())
            .replace("{question}", &quiz.question)
            .replace(
                "{checked}",
                if group_quizzes_ids.contains(&quiz.id) {
                    "checked"
                } else {
                    ""
                },
            );
    }

    let flashes = flash::take(session).await?;
    let body = include_res!(str, "/pages/groups/edit.html")
        .replace("{flash}", &flash::to_html(&flashes))
        .replace("{id}", &group.id.to_string())
        .replace("{name}", &group.name)
        .replace("{quizzes}", &checkboxes);

    Ok(Html(body).into_response())
}
