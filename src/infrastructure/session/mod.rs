//! Session infrastructure module
//!
//! Session ID generation, the in-memory session store, and the bridge that
//! reconciles sessions with the user repository.

mod bridge;
mod generator;
mod repository;

pub use bridge::SessionBridge;
pub use generator::SessionIdGenerator;
pub use repository::InMemorySessionRepository;
