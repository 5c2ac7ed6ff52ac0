//! Error types for JWT processing
//!
//! Every failure in the encode, decode and sign paths maps to exactly one
//! variant. Nothing is downgraded or swallowed: a token that fails any stage
//! surfaces the error of the first stage it failed.

use thiserror::Error;

/// Errors that can occur while encoding, decoding or signing a JWT
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Malformed token: expected three segments separated by '.'")]
    MalformedToken,

    #[error("Malformed segment: {0}")]
    MalformedSegment(String),

    #[error("JSON processing failed: {0}")]
    InvalidJson(String),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    UnsupportedAlgorithm(String),

    #[error("Algorithm '{found}' not allowed. Allowed: {allowed:?}")]
    AlgorithmNotAllowed { found: String, allowed: Vec<String> },

    // ============================================================================
    // Key Errors
    // ============================================================================
    #[error("Key cannot be used with '{algorithm}': {reason}")]
    KeyError { algorithm: String, reason: String },

    #[error("{}", key_not_found_message(.kid))]
    KeyNotFound { kid: Option<String> },

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    // ============================================================================
    // Time Claim Errors
    // ============================================================================
    #[error("Token not valid until {not_before} (now: {now}, leeway: {leeway}s)")]
    TokenNotYetValid {
        not_before: i64,
        now: i64,
        leeway: u64,
    },

    #[error("Token issued in future at {issued_at} (now: {now}, leeway: {leeway}s)")]
    TokenIssuedInFuture {
        issued_at: i64,
        now: i64,
        leeway: u64,
    },

    #[error("Token expired at {expired_at} (now: {now}, leeway: {leeway}s)")]
    TokenExpired {
        expired_at: i64,
        now: i64,
        leeway: u64,
    },
}

fn key_not_found_message(kid: &Option<String>) -> String {
    match kid {
        Some(kid) => format!("No key found for kid '{kid}'"),
        None => "Token header has no 'kid' to select a key".to_string(),
    }
}

impl Error {
    pub(crate) fn key(algorithm: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::KeyError {
            algorithm: algorithm.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for jwtseam operations
pub type Result<T> = std::result::Result<T, Error>;
