//! Domain layer - Core game rules and entities

pub mod error;
pub mod leaderboard;
pub mod scoring;
pub mod session;
pub mod user;

pub use error::DomainError;
pub use leaderboard::rank_users;
pub use scoring::{Keyword, KeywordCatalog, Redemption, DEFAULT_KEYWORD_POINTS};
pub use session::{Session, SessionId, SessionRepository, SessionResolution};
pub use user::{to_public_view, PublicUser, User, UserId, UserRepository};
