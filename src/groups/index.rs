use axum::{
    debug_handler,
    extract::State,
    response::{Html, IntoResponse, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use crate::{db, flash, include_res, AppResult};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn index(
    State(db_pool): State<SqlitePool>,
    session: Session,
) -> AppResult<Response> {
    let groups = db::group::all(&db_pool).await?;

    let mut items = String::new();
    for group in &groups {
        items += &include_res!(str, "/pages/groups/group_item.html")
            .replace("{id}", &group.id.to_string())
            .replace("{name}", &group.name);
    }

    let flashes = flash::take(&session).await?;
    let body = include_res!(str, "/pages/groups/index.html")
        .replace("{flash}", &flash::to_html(&flashes))
        .replace("{groups}", &items);

    Ok(Html(body).into_response())
}
