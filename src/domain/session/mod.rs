//! Session domain
//!
//! Opaque session identity and the resolution states the session bridge
//! reports back to the HTTP layer.

mod entity;
mod repository;

pub use entity::{Session, SessionId, SessionResolution};
pub use repository::SessionRepository;

#[cfg(test)]
pub use repository::MockSessionRepository;
