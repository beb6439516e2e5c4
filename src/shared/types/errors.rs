use axum::http::StatusCode;
use thiserror::Error;

use crate::domain::user::ValidationError;

/// Message sent to the client for failures whose detail must stay server-side.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("User not found")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl DomainError {
    /// HTTP status the account endpoints answer with for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingCredentials | Self::Validation(_) | Self::DuplicateUsername => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Storage(_) | Self::Crypto(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the failure came from the store or the hasher rather than the request.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Crypto(_))
    }

    /// Text safe to return in a `{message}` body.
    pub fn client_message(&self) -> String {
        if self.is_internal() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Password hashing error: {0}")]
    Crypto(#[from] bcrypt::BcryptError),
}

impl From<InfraError> for DomainError {
    fn from(e: InfraError) -> Self {
        match e {
            InfraError::Database(_) => DomainError::Storage(e.to_string()),
            InfraError::Crypto(_) => DomainError::Crypto(e.to_string()),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
