//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::scoring::Keyword;

/// Sequential user identifier, assigned by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Player account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    id: UserId,
    /// Username for login, unique ignoring ASCII case
    username: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Points earned from keyword redemptions
    score: u64,
    /// Lowercased keywords already converted into points, in redemption order
    redeemed_keywords: Vec<Keyword>,
}

impl User {
    /// Create a new user with no score
    pub fn new(id: UserId, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
            score: 0,
            redeemed_keywords: Vec::new(),
        }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn redeemed_keywords(&self) -> &[Keyword] {
        &self.redeemed_keywords
    }

    /// Check whether the username matches, ignoring case
    pub fn has_username(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase()
    }

    pub fn has_redeemed(&self, keyword: &Keyword) -> bool {
        self.redeemed_keywords.contains(keyword)
    }

    /// Convert a keyword into points.
    ///
    /// Returns `false` and leaves the score untouched when the keyword was
    /// already redeemed by this user.
    pub fn redeem(&mut self, keyword: &Keyword, points: u64) -> bool {
        if self.has_redeemed(keyword) {
            return false;
        }

        self.redeemed_keywords.push(keyword.clone());
        self.score = self.score.saturating_add(points);
        true
    }

    /// Credential-free view of this user
    pub fn to_public(&self) -> PublicUser {
        PublicUser::from(self)
    }
}

/// The only user shape that leaves the repository: no credential, no keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub username: String,
    pub score: u64,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            score: user.score,
        }
    }
}

/// Public view of an optional user; absent input yields `None`
pub fn to_public_view(user: Option<&User>) -> Option<PublicUser> {
    user.map(PublicUser::from)
}
