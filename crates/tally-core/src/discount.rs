//! # Discount Policies
//!
//! A discount policy turns a member and a base price into a discount amount.
//!
//! ## Policy Variants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    dyn DiscountPolicy                                   │
//! │                                                                         │
//! │  RateDiscountPolicy    VIP: base × rate_bps / 10000   BASIC: 0          │
//! │  FixedDiscountPolicy   VIP: min(amount, base)         BASIC: 0          │
//! │  NoDiscountPolicy      everyone: 0                                      │
//! │                                                                         │
//! │  Every variant: 0 <= discount <= base, negative base → InvalidAmount    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The composition root picks a variant through [`PolicyKind`] and hands it
//! to [`OrderService`](crate::OrderService) as a trait object, so swapping
//! policies never touches the order assembly code.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Member;
use crate::validation::{validate_amount, validate_fixed_amount, validate_rate_bps};
use crate::{DEFAULT_VIP_FIXED_AMOUNT, DEFAULT_VIP_RATE_BPS};

// =============================================================================
// Policy Trait
// =============================================================================

/// Computes the discount a member gets on a base price.
///
/// ## Contract
/// - Pure: the result depends only on `member` and `base_price`
/// - For `base_price >= 0` the result lies in `[0, base_price]`
/// - A negative `base_price` is rejected with
///   [`CoreError::InvalidAmount`](crate::CoreError::InvalidAmount)
pub trait DiscountPolicy: Send + Sync + fmt::Debug {
    fn apply(&self, member: &Member, base_price: Money) -> CoreResult<Money>;

    /// Short name used in logs and CLI output.
    fn name(&self) -> &'static str;
}

// =============================================================================
// Rate Policy
// =============================================================================

/// Percentage discount for VIP members; nothing for everyone else.
///
/// ## Example
/// ```rust
/// use tally_core::{DiscountPolicy, Grade, Member, MemberId, Money, RateDiscountPolicy};
///
/// let policy = RateDiscountPolicy::default(); // 10%
/// let vip = Member::new(MemberId::new(1), "memberA", Grade::Vip);
///
/// let discount = policy.apply(&vip, Money::from_cents(10000)).unwrap();
/// assert_eq!(discount.cents(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDiscountPolicy {
    rate_bps: u32,
}

impl RateDiscountPolicy {
    /// Creates a rate policy. `rate_bps` above 10000 (100%) is rejected.
    pub fn new(rate_bps: u32) -> CoreResult<Self> {
        validate_rate_bps(rate_bps)?;
        Ok(RateDiscountPolicy { rate_bps })
    }

    #[inline]
    pub fn rate_bps(&self) -> u32 {
        self.rate_bps
    }
}

impl Default for RateDiscountPolicy {
    fn default() -> Self {
        RateDiscountPolicy {
            rate_bps: DEFAULT_VIP_RATE_BPS,
        }
    }
}

impl DiscountPolicy for RateDiscountPolicy {
    fn apply(&self, member: &Member, base_price: Money) -> CoreResult<Money> {
        validate_amount("base_price", base_price)?;

        if member.is_vip() {
            Ok(base_price.percentage(self.rate_bps))
        } else {
            Ok(Money::zero())
        }
    }

    fn name(&self) -> &'static str {
        "rate"
    }
}

// =============================================================================
// Fixed Policy
// =============================================================================

/// Flat discount for VIP members, capped at the base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDiscountPolicy {
    amount: Money,
}

impl FixedDiscountPolicy {
    /// Creates a fixed policy. A negative amount is rejected.
    pub fn new(amount: Money) -> CoreResult<Self> {
        validate_fixed_amount(amount)?;
        Ok(FixedDiscountPolicy { amount })
    }

    #[inline]
    pub fn amount(&self) -> Money {
        self.amount
    }
}

impl Default for FixedDiscountPolicy {
    fn default() -> Self {
        FixedDiscountPolicy {
            amount: DEFAULT_VIP_FIXED_AMOUNT,
        }
    }
}

impl DiscountPolicy for FixedDiscountPolicy {
    fn apply(&self, member: &Member, base_price: Money) -> CoreResult<Money> {
        validate_amount("base_price", base_price)?;

        if member.is_vip() {
            Ok(self.amount.min(base_price))
        } else {
            Ok(Money::zero())
        }
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

// =============================================================================
// No Discount
// =============================================================================

/// Never discounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiscountPolicy;

impl DiscountPolicy for NoDiscountPolicy {
    fn apply(&self, _member: &Member, base_price: Money) -> CoreResult<Money> {
        validate_amount("base_price", base_price)?;
        Ok(Money::zero())
    }

    fn name(&self) -> &'static str {
        "none"
    }
}

// =============================================================================
// Policy Selection
// =============================================================================

/// Which policy variant the composition root should build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Rate,
    Fixed,
    None,
}

impl FromStr for PolicyKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rate" => Ok(PolicyKind::Rate),
            "fixed" => Ok(PolicyKind::Fixed),
            "none" => Ok(PolicyKind::None),
            other => Err(ValidationError::InvalidFormat {
                field: "discount_policy".to_string(),
                reason: format!("unknown policy '{}', expected rate, fixed or none", other),
            }),
        }
    }
}

/// Parameters for building a policy.
///
/// Only the fields relevant to `kind` are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySettings {
    pub kind: PolicyKind,
    pub vip_rate_bps: u32,
    pub vip_fixed_amount: Money,
}

impl Default for PolicySettings {
    fn default() -> Self {
        PolicySettings {
            kind: PolicyKind::Rate,
            vip_rate_bps: DEFAULT_VIP_RATE_BPS,
            vip_fixed_amount: DEFAULT_VIP_FIXED_AMOUNT,
        }
    }
}

impl PolicySettings {
    /// Builds the configured policy as a shareable trait object.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{PolicyKind, PolicySettings};
    ///
    /// let settings = PolicySettings {
    ///     kind: PolicyKind::Fixed,
    ///     ..PolicySettings::default()
    /// };
    /// assert_eq!(settings.build().unwrap().name(), "fixed");
    /// ```
    pub fn build(&self) -> CoreResult<Arc<dyn DiscountPolicy>> {
        let policy: Arc<dyn DiscountPolicy> = match self.kind {
            PolicyKind::Rate => Arc::new(RateDiscountPolicy::new(self.vip_rate_bps)?),
            PolicyKind::Fixed => Arc::new(FixedDiscountPolicy::new(self.vip_fixed_amount)?),
            PolicyKind::None => Arc::new(NoDiscountPolicy),
        };
        Ok(policy)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
