mod destroy;
mod edit;
mod index;
mod new;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    routing::{get, post, put},
    Router,
};

use crate::{db, AppError, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/new", get(new::new_group_page))
        .route("/create", post(new::create_group))
        .route("/{group_id}/edit", get(edit::edit_group_page))
        .route(
            "/{group_id}",
            put(edit::update_group).delete(destroy::destroy_group),
        )
}

/// Loads the group named by the `group_id` path parameter before the handler
/// runs; a missing row rejects the request with a descriptive not-found.
pub(crate) struct LoadGroup(pub db::Group);

impl FromRequestParts<AppState> for LoadGroup {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(group_id) = Path::<i64>::from_request_parts(parts, state).await?;
        let group = db::group::find(&state.db_pool, group_id).await?;
        Ok(LoadGroup(group))
    }
}
