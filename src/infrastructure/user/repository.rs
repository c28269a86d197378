//! In-memory user repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::scoring::{Keyword, Redemption};
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;

/// Users plus the ID counter, guarded together so creation is atomic
#[derive(Debug)]
struct UserTable {
    users: Vec<User>,
    next_id: u64,
}

impl UserTable {
    fn position_of(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|u| u.id() == id)
    }
}

/// In-memory implementation of UserRepository, empty at start
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<UserTable>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(UserTable {
                users: Vec::new(),
                next_id: 1,
            })),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, DomainError> {
        let mut table = self.table.write().await;

        if table.users.iter().any(|u| u.has_username(username)) {
            return Err(DomainError::duplicate_username(username));
        }

        let id = UserId::new(table.next_id);
        table.next_id += 1;

        let user = User::new(id, username, password_hash);
        table.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.iter().find(|u| u.has_username(username)).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.iter().find(|u| u.id() == id).cloned())
    }

    async fn redeem_keyword(
        &self,
        id: UserId,
        keyword: &Keyword,
        points: u64,
    ) -> Result<Redemption, DomainError> {
        let mut table = self.table.write().await;

        let Some(index) = table.position_of(id) else {
            return Ok(Redemption::missing_user());
        };

        Ok(Redemption::apply(&mut table.users[index], keyword, points))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.clone())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let table = self.table.read().await;
        Ok(table.users.len())
    }
}
