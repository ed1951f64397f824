//! # tally-core: Pure Pricing Logic for Tally
//!
//! This crate is the **heart** of Tally. It prices an order for a member by
//! applying a tier-dependent discount policy, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 tally-cli (composition root)                    │   │
//! │  │     builds store + policy ──► injects into OrderService         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ discount  │  │   order   │  │   │
//! │  │   │  Member   │  │   Money   │  │  Policy   │  │  Order    │  │   │
//! │  │   │  Grade    │  │   bps     │  │  variants │  │  Service  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ MemberStore trait                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tally-store (member registry)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Member, Grade, MemberId) and the store trait
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`discount`] - Discount policy trait and its variants
//! - [`order`] - The Order value object and the OrderService that builds it
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use tally_core::{
//!     CoreError, CoreResult, Grade, Member, MemberId, MemberStore, Money,
//!     OrderService, RateDiscountPolicy,
//! };
//!
//! #[derive(Debug)]
//! struct OneMember(Member);
//!
//! impl MemberStore for OneMember {
//!     fn save(&self, _member: Member) {}
//!
//!     fn find_by_id(&self, id: MemberId) -> CoreResult<Member> {
//!         if self.0.id() == id {
//!             Ok(self.0.clone())
//!         } else {
//!             Err(CoreError::MemberNotFound(id))
//!         }
//!     }
//! }
//!
//! let member = Member::new(MemberId::new(1), "memberA", Grade::Vip);
//! let service = OrderService::new(
//!     Arc::new(OneMember(member)),
//!     Arc::new(RateDiscountPolicy::default()),
//! );
//!
//! let order = service
//!     .create_order(MemberId::new(1), "itemA", Money::from_cents(10000))
//!     .unwrap();
//! assert_eq!(order.discount_price().cents(), 1000);
//! assert_eq!(order.final_price().cents(), 9000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use discount::{
    DiscountPolicy, FixedDiscountPolicy, NoDiscountPolicy, PolicyKind, PolicySettings,
    RateDiscountPolicy,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderService};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Discount rate granted to VIP members by the rate policy, in basis points.
///
/// 1000 bps = 10%.
pub const DEFAULT_VIP_RATE_BPS: u32 = 1000;

/// Flat discount granted to VIP members by the fixed policy.
pub const DEFAULT_VIP_FIXED_AMOUNT: Money = Money::from_cents(1000);

/// Longest item or member name accepted, in characters.
pub const MAX_NAME_LEN: usize = 200;
