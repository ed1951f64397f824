//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  ├── CoreError        - Pricing and lookup failures                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tally-store errors (separate crate)                                   │
//! │  └── StoreError       - Seed loading failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError / CLI exit code        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (member ID, field, amount)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::MemberId;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No member is registered under the requested ID.
    ///
    /// ## When This Occurs
    /// - `MemberStore::find_by_id` for an ID that was never saved
    /// - `OrderService::create_order` for such an ID (propagated unchanged)
    ///
    /// Never retried: the lookup is deterministic.
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// A monetary amount is outside its allowed range.
    ///
    /// ## When This Occurs
    /// - Negative base price passed to a policy or to `create_order`
    /// - A discount larger than the base price reaching `Order::new`
    #[error("Invalid amount for {field}: {cents}")]
    InvalidAmount { field: String, cents: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InvalidAmount error for a field.
    pub fn invalid_amount(field: impl Into<String>, cents: i64) -> Self {
        CoreError::InvalidAmount {
            field: field.into(),
            cents,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before pricing logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., unknown grade or policy name).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::MemberNotFound(MemberId::new(99));
        assert_eq!(err.to_string(), "Member not found: 99");

        let err = CoreError::invalid_amount("base_price", -5);
        assert_eq!(err.to_string(), "Invalid amount for base_price: -5");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "item_name".to_string(),
        };
        assert_eq!(err.to_string(), "item_name is required");

        let err = ValidationError::OutOfRange {
            field: "rate_bps".to_string(),
            min: 0,
            max: 10000,
        };
        assert_eq!(err.to_string(), "rate_bps must be between 0 and 10000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
