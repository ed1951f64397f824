//! # tally-store: Member Store for Tally
//!
//! Provides the in-memory [`MemoryMemberStore`] that backs the
//! [`MemberStore`](tally_core::MemberStore) trait, plus loading members from
//! a JSON seed.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Data Flow                                  │
//! │                                                                         │
//! │  OrderService::create_order                                            │
//! │       │ find_by_id(member_id)                                          │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   tally-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────────────┐        ┌──────────────────────┐     │   │
//! │  │   │ MemoryMemberStore   │◄───────│ seed (JSON loader)   │     │   │
//! │  │   │ RwLock<HashMap>     │        │ members.json         │     │   │
//! │  │   └─────────────────────┘        └──────────────────────┘     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tally_core::{Grade, Member, MemberId, MemberStore};
//! use tally_store::MemoryMemberStore;
//!
//! let store = MemoryMemberStore::new();
//! store.save(Member::new(MemberId::new(1), "memberA", Grade::Vip));
//!
//! assert_eq!(store.find_by_id(MemberId::new(1)).unwrap().name(), "memberA");
//! assert!(store.find_by_id(MemberId::new(2)).is_err());
//! ```

pub mod error;
pub mod memory;
pub mod seed;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryMemberStore;
pub use seed::load_members_json;
