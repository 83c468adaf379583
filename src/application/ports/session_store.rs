use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Session, SessionId};

/// A session behind its own lock. Holding the guard serializes index builds
/// and queries for that session without blocking any other.
pub type SessionHandle = Arc<Mutex<Session>>;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: Session) -> Result<SessionHandle, SessionStoreError>;

    async fn get(&self, id: SessionId) -> Result<Option<SessionHandle>, SessionStoreError>;

    async fn remove(&self, id: SessionId) -> Result<bool, SessionStoreError>;

    async fn count(&self) -> Result<usize, SessionStoreError>;

    /// Drops sessions that have sat unused past the store's idle limit and
    /// returns how many went.
    async fn evict_idle(&self) -> Result<usize, SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session already exists: {0}")]
    AlreadyExists(SessionId),
    #[error("session capacity reached ({0})")]
    CapacityReached(usize),
}
