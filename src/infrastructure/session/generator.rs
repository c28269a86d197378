//! Session ID generation

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;

use crate::domain::session::SessionId;

/// Generator for unguessable session identifiers
#[derive(Debug, Clone)]
pub struct SessionIdGenerator {
    /// Number of random bytes per identifier
    id_bytes: usize,
}

impl SessionIdGenerator {
    pub fn new() -> Self {
        Self { id_bytes: 32 }
    }

    /// Set the number of random bytes
    pub fn with_id_bytes(mut self, bytes: usize) -> Self {
        self.id_bytes = bytes;
        self
    }

    /// Generate a new session ID
    pub fn generate(&self) -> SessionId {
        let mut random_bytes = vec![0u8; self.id_bytes];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        SessionId::new(URL_SAFE_NO_PAD.encode(&random_bytes))
    }
}

impl Default for SessionIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let generator = SessionIdGenerator::new();

        let first = generator.generate();
        let second = generator.generate();

        assert_ne!(first, second);
        // 32 bytes -> 43 base64 characters without padding
        assert_eq!(first.as_str().len(), 43);
    }

    #[test]
    fn test_generated_ids_parse_back() {
        let generator = SessionIdGenerator::new().with_id_bytes(16);
        let id = generator.generate();

        assert_eq!(SessionId::parse(id.as_str()), Some(id));
    }
}
