//! Standardized error codes

use serde::{Deserialize, Serialize};

/// Error codes for every fallible boundary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input failed validation (400-class)
    ValidationFailed,
    /// Resource not found (404-class)
    NotFound,
    /// Authentication required (401-class)
    NotAuthenticated,
    /// Wrong credentials (401-class)
    InvalidCredentials,
    /// Malformed request from the caller (400-class)
    InvalidRequest,
    /// Internal error (500-class)
    InternalError,
}

impl ErrorCode {
    /// Default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid credentials",
            Self::InvalidRequest => "Invalid request",
            Self::InternalError => "Internal error",
        }
    }
}
