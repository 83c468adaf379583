use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

use crate::application::ports::{SessionHandle, SessionStore, SessionStoreError};
use crate::domain::{Session, SessionId};

struct Entry {
    handle: SessionHandle,
    last_used: Instant,
}

/// Process-local session map. Everything is lost on restart.
///
/// With an idle TTL, a session not fetched for that long is dropped by
/// [`SessionStore::evict_idle`] and, when the store is full, by `insert`.
/// A session whose lock is held is never evicted.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Entry>>,
    max_sessions: usize,
    idle_ttl: Option<Duration>,
}

impl InMemorySessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
            idle_ttl: None,
        }
    }

    pub fn with_idle_ttl(mut self, idle_ttl: Duration) -> Self {
        self.idle_ttl = Some(idle_ttl);
        self
    }

    fn evict_expired(&self, sessions: &mut HashMap<SessionId, Entry>) -> usize {
        let Some(ttl) = self.idle_ttl else {
            return 0;
        };
        let now = Instant::now();
        let before = sessions.len();
        sessions.retain(|id, entry| {
            let idle = now.saturating_duration_since(entry.last_used) >= ttl;
            let keep = !idle || entry.handle.try_lock().is_err();
            if !keep {
                tracing::debug!(session_id = %id, "Idle session evicted");
            }
            keep
        });
        before - sessions.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> Result<SessionHandle, SessionStoreError> {
        let mut sessions = self.sessions.write().await;

        if sessions.contains_key(&session.id) {
            return Err(SessionStoreError::AlreadyExists(session.id));
        }
        if sessions.len() >= self.max_sessions {
            self.evict_expired(&mut sessions);
        }
        if sessions.len() >= self.max_sessions {
            return Err(SessionStoreError::CapacityReached(self.max_sessions));
        }

        let id = session.id;
        let handle = Arc::new(Mutex::new(session));
        sessions.insert(
            id,
            Entry {
                handle: Arc::clone(&handle),
                last_used: Instant::now(),
            },
        );
        tracing::debug!(session_id = %id, active = sessions.len(), "Session created");

        Ok(handle)
    }

    async fn get(&self, id: SessionId) -> Result<Option<SessionHandle>, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.get_mut(&id).map(|entry| {
            entry.last_used = Instant::now();
            Arc::clone(&entry.handle)
        }))
    }

    async fn remove(&self, id: SessionId) -> Result<bool, SessionStoreError> {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            tracing::debug!(session_id = %id, "Session removed");
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<usize, SessionStoreError> {
        Ok(self.sessions.read().await.len())
    }

    async fn evict_idle(&self) -> Result<usize, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        let evicted = self.evict_expired(&mut sessions);
        if evicted > 0 {
            tracing::info!(evicted, active = sessions.len(), "Idle sessions evicted");
        }
        Ok(evicted)
    }
}

/// Runs [`SessionStore::evict_idle`] every `period` until the runtime shuts down.
pub fn spawn_idle_sweep(
    store: Arc<dyn SessionStore>,
    period: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(e) = store.evict_idle().await {
                tracing::warn!(error = %e, "Idle session sweep failed");
            }
        }
    })
}
