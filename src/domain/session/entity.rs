//! Session entity and related types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::PublicUser;

const MAX_SESSION_ID_LENGTH: usize = 128;

/// Opaque session identifier handed to the client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a freshly generated identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Accept an identifier presented by a client.
    ///
    /// Only URL-safe base64 characters are allowed; anything else cannot be
    /// a session this server issued.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        if raw.is_empty() || raw.len() > MAX_SESSION_ID_LENGTH {
            return None;
        }

        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }

        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-side session holding the last known public snapshot of its user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    user: PublicUser,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Create a session that lives for `ttl` from now
    pub fn new(id: SessionId, user: PublicUser, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            id,
            user,
            created_at: now,
            updated_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn user(&self) -> &PublicUser {
        &self.user
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Replace the user snapshot
    pub fn set_user(&mut self, user: PublicUser) {
        self.user = user;
        self.updated_at = Utc::now();
    }
}

/// Outcome of reconciling a session with the user repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResolution {
    /// No session reference, or one the store does not know
    Anonymous,
    /// The session pointed at a user that no longer exists; it was dropped
    Invalidated,
    /// Live session, snapshot refreshed
    Authenticated(PublicUser),
}

impl SessionResolution {
    pub fn user(&self) -> Option<&PublicUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn into_user(self) -> Option<PublicUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_invalidated(&self) -> bool {
        matches!(self, Self::Invalidated)
    }
}
