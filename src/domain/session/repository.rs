//! Session repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{Session, SessionId};
use crate::domain::user::PublicUser;
use crate::domain::DomainError;

/// Repository trait for server-side sessions
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Store a new session
    async fn insert(&self, session: Session) -> Result<(), DomainError>;

    /// Get a session by ID
    async fn get(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Replace the user snapshot; returns false if the session is gone
    async fn update_user(&self, id: &SessionId, user: PublicUser) -> Result<bool, DomainError>;

    /// Remove a session; returns false if it did not exist
    async fn remove(&self, id: &SessionId) -> Result<bool, DomainError>;

    /// Count live sessions
    async fn count(&self) -> Result<usize, DomainError>;
}
