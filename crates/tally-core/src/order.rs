//! # Orders
//!
//! The [`Order`] value object and the [`OrderService`] that assembles it.
//!
//! ## Order Assembly Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_order(member_id, item_name, base_price)                         │
//! │       │                                                                 │
//! │       ├── base_price < 0?      → InvalidAmount (nothing looked up)      │
//! │       ├── item_name empty?     → Validation                             │
//! │       ▼                                                                 │
//! │  MemberStore::find_by_id ──── unknown id → MemberNotFound (propagated)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DiscountPolicy::apply(member, base_price)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Order::new ──► immutable Order returned to the caller                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use uuid::Uuid;

use crate::discount::DiscountPolicy;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{MemberId, MemberStore};
use crate::validation::{validate_amount, validate_item_name};

// =============================================================================
// Order
// =============================================================================

/// A priced purchase of one item by one member.
///
/// ## Invariants
/// - `0 <= discount_price <= base_price`
/// - `final_price() == base_price - discount_price`, hence never negative
///
/// Fields are private; an Order cannot change after [`Order::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: String,
    member_id: MemberId,
    item_name: String,
    base_price: Money,
    discount_price: Money,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an order, checking the price invariants.
    ///
    /// ## Errors
    /// [`CoreError::InvalidAmount`] if either amount is negative or the
    /// discount exceeds the base price.
    pub fn new(
        member_id: MemberId,
        item_name: impl Into<String>,
        base_price: Money,
        discount_price: Money,
    ) -> CoreResult<Self> {
        validate_amount("base_price", base_price)?;
        validate_amount("discount_price", discount_price)?;
        if discount_price > base_price {
            return Err(CoreError::invalid_amount(
                "discount_price",
                discount_price.cents(),
            ));
        }

        Ok(Order {
            id: Uuid::new_v4().to_string(),
            member_id,
            item_name: item_name.into(),
            base_price,
            discount_price,
            created_at: Utc::now(),
        })
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn member_id(&self) -> MemberId {
        self.member_id
    }

    #[inline]
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    #[inline]
    pub fn base_price(&self) -> Money {
        self.base_price
    }

    #[inline]
    pub fn discount_price(&self) -> Money {
        self.discount_price
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The amount the member pays.
    #[inline]
    pub fn final_price(&self) -> Money {
        self.base_price - self.discount_price
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {} for member {}: {} at {} - {} discount = {}",
            self.id,
            self.member_id,
            self.item_name,
            self.base_price,
            self.discount_price,
            self.final_price()
        )
    }
}

/// Serialized with the derived `final_price` so renderers need no math.
impl Serialize for Order {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Order", 7)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("member_id", &self.member_id)?;
        state.serialize_field("item_name", &self.item_name)?;
        state.serialize_field("base_price", &self.base_price)?;
        state.serialize_field("discount_price", &self.discount_price)?;
        state.serialize_field("final_price", &self.final_price())?;
        state.serialize_field("created_at", &self.created_at)?;
        state.end()
    }
}

// =============================================================================
// Order Service
// =============================================================================

/// Assembles orders from a member store and a discount policy.
///
/// Both collaborators are injected at construction; the service never
/// chooses or builds them itself.
#[derive(Clone)]
pub struct OrderService {
    members: Arc<dyn MemberStore>,
    policy: Arc<dyn DiscountPolicy>,
}

impl OrderService {
    pub fn new(members: Arc<dyn MemberStore>, policy: Arc<dyn DiscountPolicy>) -> Self {
        OrderService { members, policy }
    }

    /// Name of the injected discount policy.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    /// Prices an order for a registered member.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidAmount`] for a negative `base_price`, raised
    ///   before the member lookup
    /// - [`CoreError::Validation`] for an empty or oversized `item_name`
    /// - [`CoreError::MemberNotFound`] when `member_id` is not registered;
    ///   no default member or zero discount is substituted
    pub fn create_order(
        &self,
        member_id: MemberId,
        item_name: &str,
        base_price: Money,
    ) -> CoreResult<Order> {
        validate_amount("base_price", base_price)?;
        validate_item_name(item_name)?;

        let member = self.members.find_by_id(member_id)?;
        let discount = self.policy.apply(&member, base_price)?;

        Order::new(member.id(), item_name.trim(), base_price, discount)
    }
}

impl fmt::Debug for OrderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::{FixedDiscountPolicy, NoDiscountPolicy, RateDiscountPolicy};
    use crate::error::ValidationError;
    use crate::types::{Grade, Member};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Minimal store that also counts lookups.
    #[derive(Default)]
    struct TestStore {
        members: Mutex<HashMap<MemberId, Member>>,
        lookups: Mutex<usize>,
    }

    impl MemberStore for TestStore {
        fn save(&self, member: Member) {
            self.members.lock().unwrap().insert(member.id(), member);
        }

        fn find_by_id(&self, id: MemberId) -> CoreResult<Member> {
            *self.lookups.lock().unwrap() += 1;
            self.members
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(CoreError::MemberNotFound(id))
        }
    }

    fn service_with(policy: Arc<dyn DiscountPolicy>) -> (Arc<TestStore>, OrderService) {
        let store = Arc::new(TestStore::default());
        store.save(Member::new(MemberId::new(1), "memberA", Grade::Vip));
        store.save(Member::new(MemberId::new(2), "memberB", Grade::Basic));
        let service = OrderService::new(store.clone(), policy);
        (store, service)
    }

    fn rate_service() -> (Arc<TestStore>, OrderService) {
        service_with(Arc::new(RateDiscountPolicy::default()))
    }

    #[test]
    fn test_vip_order_gets_rate_discount() {
        let (_, service) = rate_service();
        let order = service
            .create_order(MemberId::new(1), "itemA", Money::from_cents(10000))
            .unwrap();

        assert_eq!(order.member_id(), MemberId::new(1));
        assert_eq!(order.item_name(), "itemA");
        assert_eq!(order.base_price().cents(), 10000);
        assert_eq!(order.discount_price().cents(), 1000);
        assert_eq!(order.final_price().cents(), 9000);
    }

    #[test]
    fn test_basic_order_pays_full_price() {
        let (_, service) = rate_service();
        let order = service
            .create_order(MemberId::new(2), "itemB", Money::from_cents(5000))
            .unwrap();

        assert!(order.discount_price().is_zero());
        assert_eq!(order.final_price().cents(), 5000);
    }

    #[test]
    fn test_unknown_member_is_propagated() {
        let (_, service) = rate_service();
        let err = service
            .create_order(MemberId::new(99), "itemC", Money::from_cents(1000))
            .unwrap_err();

        assert!(matches!(err, CoreError::MemberNotFound(id) if id == MemberId::new(99)));
    }

    #[test]
    fn test_zero_price_order() {
        let (_, service) = rate_service();
        let order = service
            .create_order(MemberId::new(1), "itemA", Money::zero())
            .unwrap();

        assert!(order.discount_price().is_zero());
        assert!(order.final_price().is_zero());
    }

    #[test]
    fn test_negative_price_rejected_before_lookup() {
        let (store, service) = rate_service();
        let err = service
            .create_order(MemberId::new(99), "itemA", Money::from_cents(-1))
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidAmount { cents: -1, .. }));
        assert_eq!(*store.lookups.lock().unwrap(), 0);
    }

    #[test]
    fn test_empty_item_name_rejected() {
        let (_, service) = rate_service();
        let err = service
            .create_order(MemberId::new(1), "  ", Money::from_cents(100))
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_policy_is_swappable_without_changing_service() {
        let (_, fixed) = service_with(Arc::new(FixedDiscountPolicy::default()));
        let (_, none) = service_with(Arc::new(NoDiscountPolicy));

        let order = fixed
            .create_order(MemberId::new(1), "itemA", Money::from_cents(10000))
            .unwrap();
        assert_eq!(order.discount_price().cents(), 1000);
        assert_eq!(fixed.policy_name(), "fixed");

        let order = none
            .create_order(MemberId::new(1), "itemA", Money::from_cents(10000))
            .unwrap();
        assert!(order.discount_price().is_zero());
        assert_eq!(none.policy_name(), "none");
    }

    #[test]
    fn test_price_identity_holds() {
        let (_, service) = rate_service();
        for cents in [0, 1, 9, 10, 15, 999, 10000, 31337] {
            for id in [1, 2] {
                let order = service
                    .create_order(MemberId::new(id), "item", Money::from_cents(cents))
                    .unwrap();
                assert_eq!(
                    order.final_price(),
                    order.base_price() - order.discount_price()
                );
                assert!(!order.final_price().is_negative());
            }
        }
    }

    #[test]
    fn test_order_new_rejects_discount_above_base() {
        let err = Order::new(
            MemberId::new(1),
            "itemA",
            Money::from_cents(100),
            Money::from_cents(101),
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidAmount { .. }));

        assert!(Order::new(
            MemberId::new(1),
            "itemA",
            Money::from_cents(100),
            Money::from_cents(-1)
        )
        .is_err());
    }

    #[test]
    fn test_order_ids_are_unique() {
        let (_, service) = rate_service();
        let a = service
            .create_order(MemberId::new(1), "itemA", Money::from_cents(100))
            .unwrap();
        let b = service
            .create_order(MemberId::new(1), "itemA", Money::from_cents(100))
            .unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_order_serializes_final_price() {
        let order = Order::new(
            MemberId::new(1),
            "itemA",
            Money::from_cents(10000),
            Money::from_cents(1000),
        )
        .unwrap();
        let value = serde_json::to_value(&order).unwrap();

        assert_eq!(value["member_id"], 1);
        assert_eq!(value["item_name"], "itemA");
        assert_eq!(value["base_price"], 10000);
        assert_eq!(value["discount_price"], 1000);
        assert_eq!(value["final_price"], 9000);
    }

    #[test]
    fn test_order_display() {
        let order = Order::new(
            MemberId::new(1),
            "itemA",
            Money::from_cents(10000),
            Money::from_cents(1000),
        )
        .unwrap();
        let text = order.to_string();
        assert!(text.ends_with("for member 1: itemA at 10000 - 1000 discount = 9000"));
    }
}
