//! Game endpoints: home, keyword submission, and the leaderboard

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::{CurrentUser, RequireUser};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{Keyword, PublicUser, UserId};

pub fn create_game_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/submit-keyword", post(submit_keyword))
        .route("/leaderboard", get(leaderboard))
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub user: Option<PublicUser>,
    pub points_per_keyword: u64,
}

#[derive(Debug, Deserialize)]
pub struct SubmitKeywordRequest {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordOutcome {
    Awarded,
    AlreadyClaimed,
}

#[derive(Debug, Serialize)]
pub struct SubmitKeywordResponse {
    pub user: PublicUser,
    pub outcome: KeywordOutcome,
    pub points_awarded: u64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub id: UserId,
    pub username: String,
    pub score: u64,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub user: Option<PublicUser>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// GET /
pub async fn home(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Json<HomeResponse> {
    Json(HomeResponse {
        user,
        points_per_keyword: state.scoring_service.points_per_keyword(),
    })
}

/// POST /submit-keyword
///
/// Claiming a keyword twice is not an error: the second attempt reports
/// `already_claimed` and leaves the score unchanged.
pub async fn submit_keyword(
    State(state): State<AppState>,
    RequireUser { user, session_id }: RequireUser,
    Json(request): Json<SubmitKeywordRequest>,
) -> Result<Json<SubmitKeywordResponse>, ApiError> {
    let submission = state.scoring_service.submit(user.id, &request.keyword).await?;

    let Some(updated) = submission.redemption.user.as_ref() else {
        // The account vanished between session resolution and redemption
        state.session_bridge.invalidate(&session_id).await?;
        debug!(user_id = %user.id, "Keyword submitted for a deleted user");
        return Err(ApiError::login_required());
    };

    let user = state.session_bridge.refresh(&session_id, updated).await?;

    let (outcome, points_awarded) = if submission.redemption.already_used {
        (KeywordOutcome::AlreadyClaimed, 0)
    } else {
        (KeywordOutcome::Awarded, submission.points)
    };

    Ok(Json(SubmitKeywordResponse {
        user,
        outcome,
        points_awarded,
        message: outcome_message(outcome, &submission.keyword, submission.points),
    }))
}

/// GET /leaderboard
pub async fn leaderboard(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let standings = state.leaderboard_service.project().await?;

    Ok(Json(LeaderboardResponse {
        user,
        leaderboard: with_ranks(standings),
    }))
}

fn outcome_message(outcome: KeywordOutcome, keyword: &Keyword, points: u64) -> String {
    match outcome {
        KeywordOutcome::Awarded => format!("Nice find! \"{keyword}\" earned you {points} points."),
        KeywordOutcome::AlreadyClaimed => {
            format!("You already claimed \"{keyword}\". Try another keyword.")
        }
    }
}

/// Number the standings from 1 in their existing order
fn with_ranks(standings: Vec<PublicUser>) -> Vec<LeaderboardEntry> {
    standings
        .into_iter()
        .enumerate()
        .map(|(index, user)| LeaderboardEntry {
            rank: index + 1,
            id: user.id,
            username: user.username,
            score: user.score,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn public(id: u64, username: &str, score: u64) -> PublicUser {
        PublicUser {
            id: UserId::new(id),
            username: username.to_string(),
            score,
        }
    }

    #[test]
    fn test_outcome_messages() {
        let keyword = Keyword::new("Anchor").unwrap();

        assert_eq!(
            outcome_message(KeywordOutcome::Awarded, &keyword, 100),
            "Nice find! \"anchor\" earned you 100 points."
        );
        assert_eq!(
            outcome_message(KeywordOutcome::AlreadyClaimed, &keyword, 100),
            "You already claimed \"anchor\". Try another keyword."
        );
    }

    #[test]
    fn test_with_ranks() {
        let entries = with_ranks(vec![public(2, "b", 200), public(1, "a", 100)]);

        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].username, "b");
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[1].id, UserId::new(1));
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(
            serde_json::to_string(&KeywordOutcome::AlreadyClaimed).unwrap(),
            "\"already_claimed\""
        );
    }
}
