//! User service for registration and login

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{
    normalize_username, validate_login_password, validate_password, User, UserRepository,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// Request for registering a new player
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
}

/// User service for registration and authentication
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    /// Create a new user service
    pub fn new(repository: Arc<dyn UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new player.
    ///
    /// The username is trimmed and lowercased before it is stored.
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        let username = normalize_username(&request.username)?;

        validate_password(&request.password)?;

        // Checked again by the repository under its write lock
        if self.repository.username_exists(&username).await? {
            return Err(DomainError::duplicate_username(username));
        }

        let password_hash = self.hash_password(request.password).await?;
        let user = self.repository.create(&username, &password_hash).await?;

        info!(user_id = %user.id(), username = %user.username(), "User registered");

        Ok(user)
    }

    /// Authenticate a player with username and password.
    ///
    /// Malformed input is a validation error; unknown users and wrong
    /// passwords both yield the same credential error.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, DomainError> {
        let username = normalize_username(username)?;

        validate_login_password(password)?;

        let Some(user) = self.repository.find_by_username(&username).await? else {
            debug!(username = %username, "Login for unknown user");
            return Err(DomainError::credential(INVALID_CREDENTIALS));
        };

        if !self.verify_password(password, &user).await? {
            debug!(user_id = %user.id(), "Login with wrong password");
            return Err(DomainError::credential(INVALID_CREDENTIALS));
        }

        info!(user_id = %user.id(), username = %user.username(), "User logged in");

        Ok(user)
    }

    /// Count registered users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    // Argon2 is CPU and memory bound; keep it off the async workers
    async fn hash_password(&self, password: String) -> Result<String, DomainError> {
        let hasher = self.hasher.clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, password: &str, user: &User) -> Result<bool, DomainError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        let hash = user.password_hash().to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Password check task failed: {}", e)))
    }
}
