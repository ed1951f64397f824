//! # Validation Module
//!
//! Input validation for Tally.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI / seed file                                              │
//! │  └── Type validation (argument parsing, deserialization)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Names: non-empty, bounded length                                  │
//! │  ├── Amounts: never negative                                           │
//! │  └── Policy parameters: rate within 0..=10000 bps                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Order::new                                                   │
//! │  └── discount <= base price, final price >= 0                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::MAX_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound of a discount rate: 10000 bps = 100%.
pub const MAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates the label of an ordered item.
///
/// ## Example
/// ```rust
/// use tally_core::validation::validate_item_name;
///
/// assert!(validate_item_name("itemA").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name("item_name", name)
}

/// Validates a member's display name.
pub fn validate_member_name(name: &str) -> ValidationResult<()> {
    validate_name("member_name", name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Rejects a negative amount with [`CoreError::InvalidAmount`].
///
/// Zero is allowed (free items).
pub fn validate_amount(field: &str, amount: Money) -> CoreResult<()> {
    if amount.is_negative() {
        return Err(CoreError::invalid_amount(field, amount.cents()));
    }
    Ok(())
}

/// Validates a discount rate in basis points (0 to 10000).
pub fn validate_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > MAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: "rate_bps".to_string(),
            min: 0,
            max: MAX_RATE_BPS as i64,
        });
    }
    Ok(())
}

/// Validates a flat discount amount.
pub fn validate_fixed_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "fixed_amount".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("itemA").is_ok());
        assert!(matches!(
            validate_item_name(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_item_name(&"x".repeat(MAX_NAME_LEN + 1)),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(validate_item_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_member_name_reports_field() {
        let err = validate_member_name(" ").unwrap_err();
        assert_eq!(err.to_string(), "member_name is required");
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount("base_price", Money::zero()).is_ok());
        assert!(validate_amount("base_price", Money::from_cents(10000)).is_ok());

        let err = validate_amount("base_price", Money::from_cents(-1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount { cents: -1, .. }));
    }

    #[test]
    fn test_validate_rate_bps() {
        assert!(validate_rate_bps(0).is_ok());
        assert!(validate_rate_bps(1000).is_ok());
        assert!(validate_rate_bps(10000).is_ok());
        assert!(validate_rate_bps(10001).is_err());
    }

    #[test]
    fn test_validate_fixed_amount() {
        assert!(validate_fixed_amount(Money::from_cents(1000)).is_ok());
        assert!(validate_fixed_amount(Money::from_cents(-1)).is_err());
    }
}
