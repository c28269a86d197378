//! In-memory session repository implementation

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::session::{Session, SessionId, SessionRepository};
use crate::domain::user::PublicUser;
use crate::domain::DomainError;

/// In-memory implementation of SessionRepository
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: Session) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, existing| !existing.is_expired_at(now));
        if sessions.len() < before {
            debug!(pruned = before - sessions.len(), "Expired sessions pruned");
        }

        sessions.insert(session.id().clone(), session);
        Ok(())
    }

    async fn get(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn update_user(&self, id: &SessionId, user: PublicUser) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(id) {
            Some(session) => {
                session.set_user(user);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &SessionId) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let sessions = self.sessions.read().await;
        let now = Utc::now();
        Ok(sessions.values().filter(|s| !s.is_expired_at(now)).count())
    }
}
