//! Flash messages stored in the session and drained on the next render.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::AppResult;

pub const FLASH: &str = "flash";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flash {
    pub kind: String,
    pub message: String,
}

pub async fn success(session: &Session, message: &str) -> AppResult<()> {
    push(session, "success", message).await
}

pub async fn error(session: &Session, message: &str) -> AppResult<()> {
    push(session, "error", message).await
}

async fn push(session: &Session, kind: &str, message: &str) -> AppResult<()> {
    let mut flashes = session.get::<Vec<Flash>>(FLASH).await?.unwrap_or_default();
    flashes.push(Flash {
        kind: kind.to_owned(),
        message: message.to_owned(),
    });
    session.insert(FLASH, flashes).await?;
    Ok(())
}

/// Takes all pending messages, leaving the session without any.
pub async fn take(session: &Session) -> AppResult<Vec<Flash>> {
    Ok(session.remove::<Vec<Flash>>(FLASH).await?.unwrap_or_default())
}

pub fn to_html(flashes: &[Flash]) -> String {
    let mut html = String::new();
    for flash in flashes {
        html += &format!(
            "<div class=\"flash flash-{}\">{}</div>\n",
            flash.kind, flash.message
        );
    }
    html
}
