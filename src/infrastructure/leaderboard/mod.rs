//! Leaderboard projection over the user repository

use std::sync::Arc;

use crate::domain::leaderboard::rank_users;
use crate::domain::user::{PublicUser, UserRepository};
use crate::domain::DomainError;

/// Builds the public ranking from a repository snapshot
#[derive(Clone)]
pub struct LeaderboardService {
    repository: Arc<dyn UserRepository>,
}

impl LeaderboardService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Standings at call time: score descending, then username ascending
    pub async fn project(&self) -> Result<Vec<PublicUser>, DomainError> {
        let users = self.repository.list().await?;
        Ok(rank_users(&users))
    }
}
