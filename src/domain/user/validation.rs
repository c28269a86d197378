//! User validation utilities

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Username must be between {min} and {max} characters.")]
    UsernameLength { min: usize, max: usize },

    #[error("Username can only contain letters, numbers, underscores, and dashes.")]
    InvalidUsernameCharacter(char),

    #[error("Password must be between {min} and {max} characters.")]
    PasswordLength { min: usize, max: usize },

    #[error("Password must contain at least one letter.")]
    PasswordMissingLetter,

    #[error("Password must contain at least one number.")]
    PasswordMissingDigit,

    #[error("Password is required.")]
    PasswordRequired,
}

impl UserValidationError {
    /// Name of the request field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::UsernameLength { .. } | Self::InvalidUsernameCharacter(_) => "username",
            _ => "password",
        }
    }
}

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 20;
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 100;

/// Validate a username
///
/// Rules:
/// - Between 3 and 20 characters
/// - Only ASCII letters, digits, underscores, and hyphens
pub fn validate_username(username: &str) -> Result<(), UserValidationError> {
    let length = username.chars().count();

    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length) {
        return Err(UserValidationError::UsernameLength {
            min: MIN_USERNAME_LENGTH,
            max: MAX_USERNAME_LENGTH,
        });
    }

    if let Some(c) = username
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '_' && *c != '-')
    {
        return Err(UserValidationError::InvalidUsernameCharacter(c));
    }

    Ok(())
}

/// Trim, validate, and lowercase a submitted username
pub fn normalize_username(raw: &str) -> Result<String, UserValidationError> {
    let trimmed = raw.trim();
    validate_username(trimmed)?;
    Ok(trimmed.to_ascii_lowercase())
}

/// Validate a password chosen at registration
///
/// Rules:
/// - Between 6 and 100 characters
/// - At least one ASCII letter
/// - At least one digit
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    let length = password.chars().count();

    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(UserValidationError::PasswordLength {
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        });
    }

    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(UserValidationError::PasswordMissingLetter);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(UserValidationError::PasswordMissingDigit);
    }

    Ok(())
}

/// Login only requires a password to be present
pub fn validate_login_password(password: &str) -> Result<(), UserValidationError> {
    if password.is_empty() {
        return Err(UserValidationError::PasswordRequired);
    }

    Ok(())
}
