//! Konquest
//!
//! A small multi-player keyword hunt:
//! - Account registration and login with Argon2 password hashing
//! - Server-side sessions carried by cookie or bearer token
//! - Secret keyword redemption, once per player per keyword
//! - A leaderboard ordered by score

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{KeywordCatalog, SessionRepository, UserRepository};
use infrastructure::{
    leaderboard::LeaderboardService,
    scoring::ScoringService,
    session::{InMemorySessionRepository, SessionBridge},
    user::{Argon2Hasher, InMemoryUserRepository, UserService},
};
use tracing::info;

/// Longest accepted session lifetime, one year
const MAX_SESSION_TTL_HOURS: u64 = 24 * 365;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let catalog = KeywordCatalog::new(&config.game.secret_keywords);
    if catalog.is_empty() {
        anyhow::bail!("game.secret_keywords must contain at least one keyword");
    }

    if !(1..=MAX_SESSION_TTL_HOURS).contains(&config.session.ttl_hours) {
        anyhow::bail!("session.ttl_hours must be between 1 and {MAX_SESSION_TTL_HOURS}");
    }

    info!(
        keywords = catalog.len(),
        points = config.game.keyword_points,
        "Keyword catalog loaded"
    );

    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let sessions: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());

    let hasher = Argon2Hasher::from_config(&config.password)?;
    let user_service = UserService::new(users.clone(), Arc::new(hasher));
    let scoring_service =
        ScoringService::new(users.clone(), catalog, config.game.keyword_points);
    let leaderboard_service = LeaderboardService::new(users.clone());
    let session_bridge = SessionBridge::new(sessions, users, config.session.ttl_hours);

    Ok(AppState::new(
        user_service,
        scoring_service,
        leaderboard_service,
        session_bridge,
        config.session.clone(),
    ))
}
