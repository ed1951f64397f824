//! # Money Module
//!
//! Provides the `Money` type for handling prices and discounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    10000 × 0.1 might not come back as exactly 1000                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer amounts + basis points                           │
//! │    10000 × 1000 bps / 10000 = 1000, always                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are counted in the smallest unit. No currency is attached: the
//! same integer flows from the caller's base price to the final price.
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let price = Money::from_cents(10000);
//! let discount = price.percentage(1000); // 10%
//! assert_eq!((price - discount).cents(), 9000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the smallest unit.
///
/// "Cents" in this API means the smallest unit of whatever currency the
/// caller prices in (cents, won, pence). No currency is attached.
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative amount can be represented so that it can be
///   rejected with a typed error instead of being silently wrapped
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from a count of the smallest unit.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(10000);
    /// assert_eq!(price.cents(), 10000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the amount in the smallest unit.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the smaller of two amounts.
    #[inline]
    pub fn min(self, other: Money) -> Money {
        Money(self.0.min(other.0))
    }

    /// Returns the given fraction of this amount, in basis points.
    ///
    /// Rounds half up with integer math: `(amount * bps + 5000) / 10000`.
    /// For a non-negative amount and `bps <= 10000` the result never exceeds
    /// the amount itself.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(10000).percentage(1000).cents(), 1000);
    /// assert_eq!(Money::from_cents(5).percentage(1000).cents(), 1); // 0.5 rounds up
    /// assert_eq!(Money::from_cents(0).percentage(1000).cents(), 0);
    /// ```
    pub fn percentage(&self, bps: u32) -> Money {
        // i128 so that large amounts cannot overflow the multiplication
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the bare amount. Formatting for humans is the caller's concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(10000);
        assert_eq!(money.cents(), 10000);
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_display_is_bare_amount() {
        assert_eq!(Money::from_cents(9000).to_string(), "9000");
        assert_eq!(Money::from_cents(-5).to_string(), "-5");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a - b).cents(), 500);
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(Money::from_cents(10000).percentage(1000).cents(), 1000);
        assert_eq!(Money::from_cents(15).percentage(1000).cents(), 2); // 1.5 -> 2
        assert_eq!(Money::from_cents(14).percentage(1000).cents(), 1); // 1.4 -> 1
    }

    #[test]
    fn test_percentage_never_exceeds_amount() {
        for cents in [0, 1, 2, 7, 99, 10000, 123_456_789] {
            let amount = Money::from_cents(cents);
            for bps in [0, 1, 999, 5000, 9999, 10000] {
                let part = amount.percentage(bps);
                assert!(part >= Money::zero());
                assert!(part <= amount, "{bps} bps of {cents} gave {part}");
            }
        }
    }

    #[test]
    fn test_percentage_large_amount_does_not_overflow() {
        let amount = Money::from_cents(i64::MAX / 2);
        let part = amount.percentage(10000);
        assert_eq!(part, amount);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::from_cents(42)).unwrap();
        assert_eq!(json, "42");
    }
}
