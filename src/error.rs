//! Errors for tkn
//!
//! Parameter validation, token construction and signing report what went
//! wrong. Verification does not: every verification failure is the same
//! [`Error::VerificationFailed`] so callers cannot tell a wrong key from a
//! corrupted token.

use thiserror::Error;

/// tkn Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Parameter Errors
    // ============================================================================
    #[error("{0} is not a valid signing algorithm")]
    UnknownAlgorithm(String),

    #[error("{path} is not a valid path to {target}")]
    InvalidPath { path: String, target: &'static str },

    #[error("{0} requires a secret string to sign the token")]
    MissingSecret(String),

    #[error("{0} requires a path to a keyfile to sign the token")]
    MissingKeyPath(String),

    // ============================================================================
    // Token Errors
    // ============================================================================
    #[error("Token construction rejected: {0}")]
    ConstructionRejected(String),

    #[error("Signing failed: {0}")]
    SignFailed(String),

    #[error("Token verification failed")]
    VerificationFailed,

    // ============================================================================
    // Key Errors
    // ============================================================================
    #[error("Key type mismatch for algorithm '{algorithm}': expected {expected_key_type}, got {actual_key_type}")]
    KeyTypeMismatch {
        algorithm: String,
        expected_key_type: String,
        actual_key_type: String,
    },

    #[error("Key rejected: {0}")]
    KeyRejected(String),

    // ============================================================================
    // Description Errors
    // ============================================================================
    #[error("Unable to parse the token description: {0}")]
    DescriptionInvalid(String),
}

/// Result type alias for tkn operations
pub type Result<T> = std::result::Result<T, Error>;
