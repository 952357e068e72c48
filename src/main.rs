use quizgroups::{db, AppState};
use sqlx::sqlite::SqlitePoolOptions;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = dotenv::var("RUST_LOG").unwrap_or_else(|_| "quizgroups=debug".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(30)));

    let db_url = dotenv::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_owned());
    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(&db_url)
        .await?;
    db::create_schema(&db_pool).await?;

    let app = quizgroups::router(AppState { db_pool }).layer(session_layer);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
