//! Registration, login, and logout endpoints
//!
//! A successful register or login establishes a server-side session and
//! hands its id back both as the session cookie and in the response body.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::{clear_session_cookie, session_cookie, RequireUser, SessionContext};
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{PublicUser, User};
use crate::infrastructure::user::RegisterUserRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(get_current_user))
}

/// Username and password, as submitted by the client
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    context: SessionContext,
    Json(request): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_service
        .register(RegisterUserRequest {
            username: request.username,
            password: request.password,
        })
        .await?;

    let response = start_session(&state, context, &user).await?;

    Ok((StatusCode::CREATED, response))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    context: SessionContext,
    Json(request): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .user_service
        .authenticate(&request.username, &request.password)
        .await?;

    start_session(&state, context, &user).await
}

/// POST /auth/logout
///
/// Always succeeds; the cookie is cleared even when no session was live.
pub async fn logout(
    State(state): State<AppState>,
    context: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(session_id) = context.session_id {
        state.session_bridge.invalidate(&session_id).await?;
        debug!("Session ended by logout");
    }

    let cookie = clear_session_cookie(&state.session_config)?;

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LogoutResponse {
            message: "Logged out.".to_string(),
        }),
    ))
}

/// GET /auth/me
pub async fn get_current_user(RequireUser { user, .. }: RequireUser) -> Json<PublicUser> {
    Json(user)
}

/// Replace any session the caller already holds with a fresh one for `user`
async fn start_session(
    state: &AppState,
    context: SessionContext,
    user: &User,
) -> Result<Response, ApiError> {
    if let Some(previous) = context.session_id {
        state.session_bridge.invalidate(&previous).await?;
    }

    let session = state.session_bridge.establish(user).await?;
    let cookie = session_cookie(&state.session_config, session.id())?;

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(AuthResponse {
            user: session.user().clone(),
            session_id: session.id().as_str().to_string(),
        }),
    )
        .into_response())
}
