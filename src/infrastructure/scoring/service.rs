//! Scoring service: keyword validation and redemption

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::scoring::{Keyword, KeywordCatalog, Redemption};
use crate::domain::user::{UserId, UserRepository};
use crate::domain::DomainError;

/// Result of a keyword submission that passed validation
#[derive(Debug, Clone)]
pub struct KeywordSubmission {
    pub keyword: Keyword,
    pub points: u64,
    pub redemption: Redemption,
}

/// Applies keyword redemption rules against the user repository
#[derive(Clone)]
pub struct ScoringService {
    repository: Arc<dyn UserRepository>,
    catalog: Arc<KeywordCatalog>,
    points_per_keyword: u64,
}

impl ScoringService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        catalog: KeywordCatalog,
        points_per_keyword: u64,
    ) -> Self {
        Self {
            repository,
            catalog: Arc::new(catalog),
            points_per_keyword,
        }
    }

    pub fn points_per_keyword(&self) -> u64 {
        self.points_per_keyword
    }

    /// Redeem an already-validated keyword for a user.
    ///
    /// The keyword is lowercased before it is compared or stored. A missing
    /// user yields `Redemption { user: None, already_used: false }`.
    pub async fn redeem_keyword(
        &self,
        user_id: UserId,
        keyword: &str,
        points: u64,
    ) -> Result<Redemption, DomainError> {
        let keyword = Keyword::new(keyword)?;
        self.redeem(user_id, &keyword, points).await
    }

    /// Validate a raw submission against the allow-list, then redeem it with
    /// the configured point value
    pub async fn submit(
        &self,
        user_id: UserId,
        raw_keyword: &str,
    ) -> Result<KeywordSubmission, DomainError> {
        let keyword = self.catalog.validate(raw_keyword).inspect_err(|_| {
            debug!(user_id = %user_id, "Rejected keyword submission");
        })?;

        let redemption = self.redeem(user_id, &keyword, self.points_per_keyword).await?;

        Ok(KeywordSubmission {
            keyword,
            points: self.points_per_keyword,
            redemption,
        })
    }

    async fn redeem(
        &self,
        user_id: UserId,
        keyword: &Keyword,
        points: u64,
    ) -> Result<Redemption, DomainError> {
        let redemption = self.repository.redeem_keyword(user_id, keyword, points).await?;

        match &redemption.user {
            None => warn!(user_id = %user_id, "Keyword redemption for missing user"),
            Some(_) if redemption.already_used => {
                debug!(user_id = %user_id, keyword = %keyword, "Keyword already redeemed")
            }
            Some(user) => info!(
                user_id = %user_id,
                keyword = %keyword,
                points,
                score = user.score(),
                "Keyword redeemed"
            ),
        }

        Ok(redemption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;
    use crate::infrastructure::user::InMemoryUserRepository;

    async fn create_service() -> (ScoringService, UserId) {
        let repository = Arc::new(InMemoryUserRepository::new());
        let user = repository.create("bob", "hash").await.unwrap();
        let service = ScoringService::new(repository, KeywordCatalog::default(), 100);
        (service, user.id())
    }

    #[tokio::test]
    async fn test_redeem_twice() {
        let (service, user_id) = create_service().await;

        let first = service.redeem_keyword(user_id, "treasure", 100).await.unwrap();
        assert!(!first.already_used);
        assert_eq!(first.user.unwrap().score(), 100);

        let second = service.redeem_keyword(user_id, "treasure", 100).await.unwrap();
        assert!(second.already_used);
        assert_eq!(second.user.unwrap().score(), 100);
    }

    #[tokio::test]
    async fn test_redeem_ignores_keyword_case() {
        let (service, user_id) = create_service().await;

        let first = service.redeem_keyword(user_id, "Treasure", 100).await.unwrap();
        assert!(!first.already_used);

        let second = service.redeem_keyword(user_id, "treasure", 100).await.unwrap();
        assert!(second.already_used);

        let user = second.user.unwrap();
        assert_eq!(user.score(), 100);
        assert_eq!(user.redeemed_keywords()[0].as_str(), "treasure");
    }

    #[tokio::test]
    async fn test_redeem_missing_user() {
        let (service, _) = create_service().await;

        let redemption = service
            .redeem_keyword(UserId::new(404), "anchor", 100)
            .await
            .unwrap();

        assert!(redemption.user.is_none());
        assert!(!redemption.already_used);
    }

    #[tokio::test]
    async fn test_submit_uses_configured_points() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let user = repository.create("bob", "hash").await.unwrap();
        let service = ScoringService::new(repository, KeywordCatalog::new(["anchor"]), 250);

        let submission = service.submit(user.id(), "  ANCHOR ").await.unwrap();

        assert_eq!(submission.keyword.as_str(), "anchor");
        assert_eq!(submission.points, 250);
        assert!(submission.redemption.is_awarded());
        assert_eq!(submission.redemption.user.unwrap().score(), 250);
    }

    #[tokio::test]
    async fn test_submit_rejects_unknown_keyword() {
        let (service, user_id) = create_service().await;

        let err = service.submit(user_id, "kraken").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidKeyword { .. }));

        let err = service.submit(user_id, "   ").await.unwrap_err();
        assert!(err.to_string().contains("Enter a keyword"));
    }

    #[tokio::test]
    async fn test_invalid_keyword_never_reaches_repository() {
        let mut repository = MockUserRepository::new();
        repository.expect_redeem_keyword().never();

        let service = ScoringService::new(Arc::new(repository), KeywordCatalog::default(), 100);

        assert!(service.submit(UserId::new(1), "kraken").await.is_err());
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_redeem_keyword()
            .returning(|_, _, _| Err(DomainError::storage("unavailable")));

        let service = ScoringService::new(Arc::new(repository), KeywordCatalog::default(), 100);

        let err = service.submit(UserId::new(1), "anchor").await.unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
    }
}
