//! API middleware components

pub mod logging;
pub mod security;
pub mod session;

pub use logging::logging_middleware;
pub use security::security_headers_middleware;
pub use session::{
    clear_session_cookie, session_cookie, session_middleware, CurrentUser, RequireUser,
    SessionContext,
};
