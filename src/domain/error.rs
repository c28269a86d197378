use thiserror::Error;

use super::user::UserValidationError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Username '{username}' already exists")]
    DuplicateUsername { username: String },

    #[error("Invalid keyword: {message}")]
    InvalidKeyword { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Validation failure attributed to one input field
    pub fn field_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    pub fn duplicate_username(username: impl Into<String>) -> Self {
        Self::DuplicateUsername {
            username: username.into(),
        }
    }

    pub fn invalid_keyword(message: impl Into<String>) -> Self {
        Self::InvalidKeyword {
            message: message.into(),
        }
    }

    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

impl From<UserValidationError> for DomainError {
    fn from(err: UserValidationError) -> Self {
        Self::field_validation(err.field(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_error() {
        let error = DomainError::credential("Invalid username or password.");
        assert_eq!(error.to_string(), "Credential error: Invalid username or password.");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Password is required.");
        assert_eq!(error.to_string(), "Validation error: Password is required.");
    }

    #[test]
    fn test_duplicate_username_error() {
        let error = DomainError::duplicate_username("alice");
        assert_eq!(error.to_string(), "Username 'alice' already exists");
    }

    #[test]
    fn test_invalid_keyword_error() {
        let error = DomainError::invalid_keyword("Keyword not recognized. Try again.");
        assert_eq!(
            error.to_string(),
            "Invalid keyword: Keyword not recognized. Try again."
        );
    }

    #[test]
    fn test_from_user_validation_error() {
        let error: DomainError = UserValidationError::PasswordRequired.into();
        assert!(matches!(
            error,
            DomainError::Validation { ref field, .. } if field.as_deref() == Some("password")
        ));
        assert_eq!(error.to_string(), "Validation error: Password is required.");
    }
}
