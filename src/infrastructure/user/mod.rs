//! User infrastructure module
//!
//! This module provides implementations for player accounts,
//! including password hashing with Argon2, in-memory repository, and user service.

mod password;
mod repository;
mod service;

pub use password::{Argon2Hasher, PasswordHasher};
pub use repository::InMemoryUserRepository;
pub use service::{RegisterUserRequest, UserService};
