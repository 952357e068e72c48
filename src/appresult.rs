use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::DbError;

pub type AppResult<T> = Result<T, AppError>;
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(DbError::NotFound(message)) = self.0.downcast_ref::<DbError>() {
            return (StatusCode::NOT_FOUND, message.clone()).into_response();
        }

        tracing::error!("request failed: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}\n\n{}", self.0, self.0.backtrace()),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
