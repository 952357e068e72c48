use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::AppResult;

pub const RANDOM_PLAY: &str = "random_play";

/// Per-user progress through the random-play streak.
///
/// `last_quiz_id` is the quiz currently presented (0 = none pending) and is
/// never also in `resolved`: `resolve` zeroes it before recording the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomPlay {
    pub resolved: Vec<i64>,
    pub last_quiz_id: i64,
}

impl RandomPlay {
    pub async fn load_or_init(session: &Session) -> AppResult<Self> {
        Ok(session.get::<Self>(RANDOM_PLAY).await?.unwrap_or_default())
    }

    pub async fn save(&self, session: &Session) -> AppResult<()> {
        session.insert(RANDOM_PLAY, self).await?;
        Ok(())
    }

    pub async fn clear(session: &Session) -> AppResult<()> {
        session.remove::<Self>(RANDOM_PLAY).await?;
        Ok(())
    }

    /// Records a correct answer: the quiz is no longer pending and joins
    /// the resolved streak in solve order.
    pub fn resolve(&mut self, quiz_id: i64) {
        self.last_quiz_id = 0;
        self.resolved.push(quiz_id);
    }

    pub fn score(&self) -> usize {
        self.resolved.len()
    }
}
