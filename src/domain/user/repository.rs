//! User repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserId};
use crate::domain::scoring::{Keyword, Redemption};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations must apply `create` and `redeem_keyword` atomically with
/// respect to concurrent callers.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user with the next sequential ID.
    ///
    /// Fails with `DomainError::DuplicateUsername` when the username is
    /// already taken, ignoring ASCII case.
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, DomainError>;

    /// Get a user by their username, ignoring ASCII case
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Get a user by their ID
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Redeem a keyword for a user, adding `points` the first time only
    async fn redeem_keyword(
        &self,
        id: UserId,
        keyword: &Keyword,
        points: u64,
    ) -> Result<Redemption, DomainError>;

    /// Snapshot of all users
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Count users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a username exists
    async fn username_exists(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_username(username).await?.is_some())
    }
}
