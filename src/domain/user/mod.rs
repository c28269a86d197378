//! User domain
//!
//! This module provides domain types and traits for player accounts,
//! including user entities, validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{to_public_view, PublicUser, User, UserId};
pub use repository::UserRepository;
pub use validation::{
    normalize_username, validate_login_password, validate_password, validate_username,
    UserValidationError, MAX_PASSWORD_LENGTH, MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH,
    MIN_USERNAME_LENGTH,
};

#[cfg(test)]
pub use repository::MockUserRepository;
