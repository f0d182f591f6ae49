//! Error types for Learnboard
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using LearnError
pub type Result<T> = std::result::Result<T, LearnError>;

/// Unified error type for Learnboard operations
#[derive(Debug, Error)]
pub enum LearnError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("User not found")]
    UserNotFound,

    #[error("Course not found")]
    CourseNotFound,

    #[error("Enrollment not found")]
    EnrollmentNotFound,

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded {status}: {message}")]
    Remote { status: u16, message: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LearnError {
    /// True for the lookup variants (unknown user, course or enrollment)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LearnError::UserNotFound | LearnError::CourseNotFound | LearnError::EnrollmentNotFound
        )
    }
}

impl From<serde_json::Error> for LearnError {
    fn from(e: serde_json::Error) -> Self {
        LearnError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for LearnError {
    fn from(e: toml::de::Error) -> Self {
        LearnError::Config(e.to_string())
    }
}
