pub mod appresult;
pub mod db;
pub mod flash;
pub mod groups;
pub mod play;
pub mod res;
pub mod session;

use axum::{
    extract::{FromRef, Request},
    http::Method,
    middleware::{self, Next},
    response::Response,
    Router,
};
use sqlx::SqlitePool;

pub use appresult::{AppError, AppResult};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/groups", groups::router())
        .nest("/quizzes", play::router())
        .with_state(state)
        .layer(middleware::from_fn(method_override))
}

/// Browser forms can only send GET/POST; a `_method` query parameter on a
/// POST rewrites it to the route's real verb before dispatch.
async fn method_override(mut req: Request, next: Next) -> Response {
    if req.method() == Method::POST {
        let overridden = req
            .uri()
            .query()
            .and_then(|q| q.split('&').find_map(|pair| pair.strip_prefix("_method=")));

        match overridden {
            Some("PUT") => *req.method_mut() = Method::PUT,
            Some("DELETE") => *req.method_mut() = Method::DELETE,
            _ => {}
        }
    }

    next.run(req).await
}
