use axum::{
    debug_handler,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{db, db::DbError, flash, include_res, AppResult};

#[derive(Debug, Deserialize)]
pub(crate) struct NewGroupForm {
    name: String,
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn new_group_page(session: Session) -> AppResult<Response> {
    render_new(&session, "").await
}

#[debug_handler(state = crate::AppState)]
pub(crate) async fn create_group(
    State(db_pool): State<SqlitePool>,
    session: Session,
    Form(NewGroupForm { name }): Form<NewGroupForm>,
) -> AppResult<Response> {
    match db::group::create(&db_pool, &name).await {
        Ok(group) => {
            flash::success(&session, "Group created successfully.").await?;
            Ok(Redirect::to(&format!("/groups/{}", group.id)).into_response())
        }
        Err(DbError::Validation(errors)) => {
            flash::error(&session, "There are errors in the form:").await?;
            for message in &errors {
                flash::error(&session, message).await?;
            }
            // Re-render, keeping the submitted value; the URL stays on the
            // submission endpoint.
            render_new(&session, &name).await
        }
        Err(err) => {
            flash::error(&session, &format!("Error creating a new group: {err}")).await?;
            Err(err.into())
        }
    }
}

async fn render_new(session: &Session, name: &str) -> AppResult<Response> {
    let flashes = flash::take(session).await?;
    let body = include_res!(str, "/pages/groups/new.html")
        .replace("{flash}", &flash::to_html(&flashes))
        .replace("{name}", name);

    Ok(Html(body).into_response())
}
