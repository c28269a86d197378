//! Application state for shared services

use std::sync::Arc;

use crate::config::SessionConfig;
use crate::infrastructure::{
    leaderboard::LeaderboardService, scoring::ScoringService, session::SessionBridge,
    user::UserService,
};

/// Services shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub scoring_service: Arc<ScoringService>,
    pub leaderboard_service: Arc<LeaderboardService>,
    pub session_bridge: Arc<SessionBridge>,
    pub session_config: Arc<SessionConfig>,
}

impl AppState {
    pub fn new(
        user_service: UserService,
        scoring_service: ScoringService,
        leaderboard_service: LeaderboardService,
        session_bridge: SessionBridge,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            user_service: Arc::new(user_service),
            scoring_service: Arc::new(scoring_service),
            leaderboard_service: Arc::new(leaderboard_service),
            session_bridge: Arc::new(session_bridge),
            session_config: Arc::new(session_config),
        }
    }
}
