//! Session identity bridge
//!
//! The single place where session state and repository state are reconciled.
//! Every request that depends on "who is the current user" goes through
//! [`SessionBridge::resolve_current_user`] first.

use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info};

use crate::domain::session::{Session, SessionId, SessionRepository, SessionResolution};
use crate::domain::user::{PublicUser, User, UserRepository};
use crate::domain::DomainError;

use super::generator::SessionIdGenerator;

/// Maps opaque session IDs to current users
#[derive(Clone)]
pub struct SessionBridge {
    sessions: Arc<dyn SessionRepository>,
    users: Arc<dyn UserRepository>,
    generator: SessionIdGenerator,
    ttl: Duration,
}

impl SessionBridge {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        users: Arc<dyn UserRepository>,
        ttl_hours: u64,
    ) -> Self {
        Self {
            sessions,
            users,
            generator: SessionIdGenerator::new(),
            ttl: Duration::hours(ttl_hours as i64),
        }
    }

    /// Start a session for a freshly authenticated user
    pub async fn establish(&self, user: &User) -> Result<Session, DomainError> {
        let session = Session::new(self.generator.generate(), user.to_public(), self.ttl);
        self.sessions.insert(session.clone()).await?;

        debug!(user_id = %user.id(), "Session established");

        Ok(session)
    }

    /// Resolve the session reference to the current public user.
    ///
    /// - no reference, or one the store does not know: `Anonymous`
    /// - an expired session: removed, then `Anonymous`
    /// - the user is gone from the repository: the session is removed and
    ///   `Invalidated` is returned so the caller can clear its reference
    /// - otherwise the stored snapshot is refreshed and returned
    pub async fn resolve_current_user(
        &self,
        session_id: Option<&SessionId>,
    ) -> Result<SessionResolution, DomainError> {
        let Some(session_id) = session_id else {
            return Ok(SessionResolution::Anonymous);
        };

        let Some(session) = self.sessions.get(session_id).await? else {
            return Ok(SessionResolution::Anonymous);
        };

        if session.is_expired() {
            debug!(user_id = %session.user().id, "Session expired");
            self.sessions.remove(session_id).await?;
            return Ok(SessionResolution::Anonymous);
        }

        match self.users.find_by_id(session.user().id).await? {
            Some(user) => {
                let public = self.refresh(session_id, &user).await?;
                Ok(SessionResolution::Authenticated(public))
            }
            None => {
                info!(user_id = %session.user().id, "Session refers to unknown user, invalidating");
                self.sessions.remove(session_id).await?;
                Ok(SessionResolution::Invalidated)
            }
        }
    }

    /// Store the latest public snapshot of `user` in the session
    pub async fn refresh(&self, session_id: &SessionId, user: &User) -> Result<PublicUser, DomainError> {
        let public = user.to_public();
        self.sessions.update_user(session_id, public.clone()).await?;
        Ok(public)
    }

    /// Drop a session; returns false if it was already gone
    pub async fn invalidate(&self, session_id: &SessionId) -> Result<bool, DomainError> {
        self.sessions.remove(session_id).await
    }

    pub async fn exists(&self, session_id: &SessionId) -> Result<bool, DomainError> {
        let session = self.sessions.get(session_id).await?;
        Ok(session.is_some_and(|s| !s.is_expired()))
    }

    /// Count live sessions
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.sessions.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::Keyword;
    use crate::domain::session::MockSessionRepository;
    use crate::domain::user::UserId;
    use crate::infrastructure::session::InMemorySessionRepository;
    use crate::infrastructure::user::InMemoryUserRepository;

    fn create_bridge() -> (SessionBridge, Arc<InMemoryUserRepository>) {
        let users = Arc::new(InMemoryUserRepository::new());
        let sessions = Arc::new(InMemorySessionRepository::new());
        (SessionBridge::new(sessions, users.clone(), 24), users)
    }

    #[tokio::test]
    async fn test_no_reference_is_anonymous() {
        let (bridge, _) = create_bridge();

        let resolution = bridge.resolve_current_user(None).await.unwrap();
        assert_eq!(resolution, SessionResolution::Anonymous);
    }

    #[tokio::test]
    async fn test_unknown_session_is_anonymous() {
        let (bridge, _) = create_bridge();
        let unknown = SessionId::new("never-issued");

        let resolution = bridge.resolve_current_user(Some(&unknown)).await.unwrap();
        assert_eq!(resolution, SessionResolution::Anonymous);
    }

    #[tokio::test]
    async fn test_resolve_refreshes_snapshot() {
        let (bridge, users) = create_bridge();
        let bob = users.create("bob", "hash").await.unwrap();
        let session = bridge.establish(&bob).await.unwrap();
        assert_eq!(session.user().score, 0);

        users
            .redeem_keyword(bob.id(), &Keyword::new("anchor").unwrap(), 100)
            .await
            .unwrap();

        let resolution = bridge.resolve_current_user(Some(session.id())).await.unwrap();
        assert_eq!(resolution.user().unwrap().score, 100);

        // The stored snapshot was refreshed as well
        let stored = bridge.sessions.get(session.id()).await.unwrap().unwrap();
        assert_eq!(stored.user().score, 100);
    }

    #[tokio::test]
    async fn test_stale_user_invalidates_session() {
        let (bridge, _) = create_bridge();

        // Session referencing a user that a fresh repository never had,
        // e.g. after a restart reset the store
        let stale = User::new(UserId::new(7), "ghost", "hash");
        let session = bridge.establish(&stale).await.unwrap();

        let resolution = bridge.resolve_current_user(Some(session.id())).await.unwrap();

        assert!(resolution.is_invalidated());
        assert!(resolution.user().is_none());
        assert!(!bridge.exists(session.id()).await.unwrap());
    }

    #[tokio::test]
    async fn test_expired_session_is_anonymous_and_removed() {
        let users = Arc::new(InMemoryUserRepository::new());
        let bridge = SessionBridge::new(
            Arc::new(InMemorySessionRepository::new()),
            users.clone(),
            0,
        );
        let bob = users.create("bob", "hash").await.unwrap();
        let session = bridge.establish(&bob).await.unwrap();

        assert!(!bridge.exists(session.id()).await.unwrap());

        let resolution = bridge.resolve_current_user(Some(session.id())).await.unwrap();

        assert_eq!(resolution, SessionResolution::Anonymous);
        assert!(bridge.sessions.get(session.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalidate() {
        let (bridge, users) = create_bridge();
        let bob = users.create("bob", "hash").await.unwrap();
        let session = bridge.establish(&bob).await.unwrap();

        assert_eq!(bridge.count().await.unwrap(), 1);
        assert!(bridge.invalidate(session.id()).await.unwrap());
        assert!(!bridge.invalidate(session.id()).await.unwrap());
        assert_eq!(bridge.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_session_store_failure_propagates() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_get()
            .returning(|_| Err(DomainError::storage("unavailable")));

        let bridge = SessionBridge::new(
            Arc::new(sessions),
            Arc::new(InMemoryUserRepository::new()),
            24,
        );
        let id = SessionId::new("sid");

        assert!(bridge.resolve_current_user(Some(&id)).await.is_err());
    }
}
