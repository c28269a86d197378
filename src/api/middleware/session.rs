//! Session resolution middleware and extractors
//!
//! The session id travels in the session cookie or, for non-browser
//! clients, as `Authorization: Bearer <session id>`. The middleware
//! resolves it once per request and stores a [`SessionContext`] in the
//! request extensions for the extractors below.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::config::SessionConfig;
use crate::domain::{PublicUser, SessionId};

/// Per-request view of the caller's session
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// Set only when the session is live and bound to an existing user
    pub session_id: Option<SessionId>,
    pub user: Option<PublicUser>,
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Extractor for the current user, if any
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<PublicUser>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let context = SessionContext::from_request_parts(parts, state).await?;
        Ok(CurrentUser(context.user))
    }
}

/// Extractor that rejects anonymous callers with `401 login_required`
#[derive(Debug, Clone)]
pub struct RequireUser {
    pub user: PublicUser,
    pub session_id: SessionId,
}

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts
            .extensions
            .get::<SessionContext>()
            .cloned()
            .unwrap_or_default();

        match (context.session_id, context.user) {
            (Some(session_id), Some(user)) => Ok(RequireUser { user, session_id }),
            _ => Err(ApiError::login_required()),
        }
    }
}

/// Resolve the caller's session before the handler runs.
///
/// If the request carried a session cookie whose session no longer exists
/// once the handler is done, and the handler did not set a cookie itself,
/// the response clears the cookie.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let config = &state.session_config;
    let cookie_id = cookie_session_id(request.headers(), &config.cookie_name);
    let presented = cookie_id.clone().or_else(|| bearer_session_id(request.headers()));

    let resolution = match state
        .session_bridge
        .resolve_current_user(presented.as_ref())
        .await
    {
        Ok(resolution) => resolution,
        Err(e) => return ApiError::from(e).into_response(),
    };

    if resolution.is_invalidated() {
        debug!("Session referenced a deleted user and was discarded");
    }

    let user = resolution.into_user();
    let context = SessionContext {
        session_id: user.as_ref().and(presented),
        user,
    };
    request.extensions_mut().insert(context);

    let mut response = next.run(request).await;

    if let Some(session_id) = cookie_id {
        if !response.headers().contains_key(header::SET_COOKIE)
            && !state.session_bridge.exists(&session_id).await.unwrap_or(true)
        {
            match clear_session_cookie(config) {
                Ok(cookie) => {
                    response.headers_mut().append(header::SET_COOKIE, cookie);
                }
                Err(e) => warn!(error = %e, "Could not build session cookie"),
            }
        }
    }

    response
}

/// Read the session id from the `Cookie` header(s)
pub fn cookie_session_id(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| SessionId::parse(value))
}

/// Read the session id from `Authorization: Bearer <id>`
pub fn bearer_session_id(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .and_then(SessionId::parse)
}

/// `Set-Cookie` value carrying a new session id
pub fn session_cookie(config: &SessionConfig, session_id: &SessionId) -> Result<HeaderValue, ApiError> {
    let secure = if config.secure_cookie { "; Secure" } else { "" };
    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax{}",
        config.cookie_name,
        session_id.as_str(),
        secure
    );

    HeaderValue::from_str(&cookie).map_err(|e| ApiError::internal(e.to_string()))
}

/// `Set-Cookie` value that expires the session cookie
pub fn clear_session_cookie(config: &SessionConfig) -> Result<HeaderValue, ApiError> {
    let secure = if config.secure_cookie { "; Secure" } else { "" };
    let cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0{}",
        config.cookie_name, secure
    );

    HeaderValue::from_str(&cookie).map_err(|e| ApiError::internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use axum::http::StatusCode;

    fn config() -> SessionConfig {
        SessionConfig::default()
    }

    #[test]
    fn test_cookie_session_id() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            "theme=dark; konquest.sid=abc123; other=1".parse().unwrap(),
        );

        let id = cookie_session_id(&headers, "konquest.sid").unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_cookie_session_id_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, "theme=dark".parse().unwrap());
        headers.append(header::COOKIE, "konquest.sid=xyz".parse().unwrap());

        let id = cookie_session_id(&headers, "konquest.sid").unwrap();
        assert_eq!(id.as_str(), "xyz");
    }

    #[test]
    fn test_cookie_session_id_missing_or_blank() {
        let mut headers = HeaderMap::new();
        assert!(cookie_session_id(&headers, "konquest.sid").is_none());

        headers.insert(header::COOKIE, "konquest.sid=".parse().unwrap());
        assert!(cookie_session_id(&headers, "konquest.sid").is_none());
    }

    #[test]
    fn test_bearer_session_id() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer token_1".parse().unwrap());
        assert_eq!(bearer_session_id(&headers).unwrap().as_str(), "token_1");

        headers.insert(header::AUTHORIZATION, "Basic dXNlcg==".parse().unwrap());
        assert!(bearer_session_id(&headers).is_none());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie(&config(), &SessionId::new("abc")).unwrap();
        let cookie = cookie.to_str().unwrap();

        assert!(cookie.starts_with("konquest.sid=abc;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_secure_cookie() {
        let config = SessionConfig {
            secure_cookie: true,
            ..SessionConfig::default()
        };

        let cookie = clear_session_cookie(&config).unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.ends_with("; Secure"));
    }

    #[tokio::test]
    async fn test_require_user_rejects_anonymous() {
        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        parts.extensions.insert(SessionContext::default());

        let err = RequireUser::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.response.error.code, Some("login_required".to_string()));
    }

    #[tokio::test]
    async fn test_require_user_accepts_live_session() {
        let user = PublicUser {
            id: UserId::new(1),
            username: "alice".to_string(),
            score: 0,
        };
        let (mut parts, _) = axum::http::Request::new(()).into_parts();
        parts.extensions.insert(SessionContext {
            session_id: Some(SessionId::new("abc")),
            user: Some(user.clone()),
        });

        let required = RequireUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(required.user, user);

        let CurrentUser(current) = CurrentUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(current, Some(user));
    }
}
