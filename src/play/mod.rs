mod random;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    routing::get,
    Router,
};

use crate::{db, AppError, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/randomPlay", get(random::random_play))
        .route("/randomCheck/{quiz_id}", get(random::random_check))
}

/// Loads the quiz named by the `quiz_id` path parameter before the handler
/// runs.
pub(crate) struct LoadQuiz(pub db::Quiz);

impl FromRequestParts<AppState> for LoadQuiz {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(quiz_id) = Path::<i64>::from_request_parts(parts, state).await?;
        let quiz = db::quiz::find(&state.db_pool, quiz_id).await?;
        Ok(LoadQuiz(quiz))
    }
}
