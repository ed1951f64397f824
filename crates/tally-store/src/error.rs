//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  serde_json::Error ──┐                                                  │
//! │                      ├──► StoreError::InvalidSeed                       │
//! │  ValidationError ────┘                                                  │
//! │                                                                         │
//! │  StoreError ────────────► CLI logs it and exits non-zero                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups never produce a StoreError: a missing member is
//! `CoreError::MemberNotFound`, returned through the `MemberStore` trait.

use thiserror::Error;

/// Member store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Seed data could not be turned into members.
    ///
    /// ## When This Occurs
    /// - Malformed JSON or wrong shape
    /// - Empty member name or unknown grade
    /// - The same ID listed twice
    #[error("Invalid member seed: {reason}")]
    InvalidSeed { reason: String },
}

impl StoreError {
    /// Creates an InvalidSeed error.
    pub fn invalid_seed(reason: impl Into<String>) -> Self {
        StoreError::InvalidSeed {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::invalid_seed(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
