//! Registry of in-progress practice sessions.
//!
//! Sessions that go untouched for longer than the TTL are dropped on the
//! next insert or lookup.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use lexiflow_core::GameSession;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{ApiError, Result};

/// Default idle time before a session is evicted.
pub const DEFAULT_SESSION_TTL_MINUTES: i64 = 60;

#[derive(Debug)]
struct SessionEntry {
    session: GameSession,
    last_touched: DateTime<Utc>,
}

#[derive(Debug)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, SessionEntry>>,
    ttl: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_SESSION_TTL_MINUTES))
    }
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn insert(&self, session: GameSession, now: DateTime<Utc>) -> Uuid {
        let id = session.id();
        let mut sessions = self.sessions.lock().await;
        self.evict_stale(&mut sessions, now);
        sessions.insert(
            id,
            SessionEntry {
                session,
                last_touched: now,
            },
        );
        id
    }

    /// Run `f` against a live session and mark it as touched.
    pub async fn with_session<T>(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
        f: impl FnOnce(&mut GameSession) -> Result<T>,
    ) -> Result<T> {
        let mut sessions = self.sessions.lock().await;
        self.evict_stale(&mut sessions, now);
        let entry = sessions
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))?;
        entry.last_touched = now;
        f(&mut entry.session)
    }

    /// Remove a session, returning it.
    pub async fn take(&self, id: Uuid, now: DateTime<Utc>) -> Result<GameSession> {
        let mut sessions = self.sessions.lock().await;
        self.evict_stale(&mut sessions, now);
        sessions
            .remove(&id)
            .map(|entry| entry.session)
            .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    fn evict_stale(&self, sessions: &mut HashMap<Uuid, SessionEntry>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, entry| now - entry.last_touched <= self.ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, "evicted idle sessions");
        }
    }
}
