use axum::{
    debug_handler,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};
use sqlx::SqlitePool;
use tower_sessions::Session;

use super::LoadGroup;
use crate::{db, flash, AppResult};

#[debug_handler(state = crate::AppState)]
pub(crate) async fn destroy_group(
    State(db_pool): State<SqlitePool>,
    session: Session,
    headers: HeaderMap,
    LoadGroup(group): LoadGroup,
) -> AppResult<Response> {
    match db::group::delete(&db_pool, group.id).await {
        Ok(()) => {
            flash::success(&session, "group deleted successfully.").await?;
            // "go back": return to the page the delete was issued from.
            let back = headers
                .get(header::REFERER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("/groups");
            Ok(Redirect::to(back).into_response())
        }
        Err(err) => {
            flash::error(&session, &format!("Error deleting the group: {err}")).await?;
            Err(err.into())
        }
    }
}
