//! # Memory Member Store
//!
//! An in-memory member registry.
//!
//! ## Thread Safety
//! Members live in a `HashMap` behind an `RwLock`:
//! 1. `save` takes the write lock for a single insert
//! 2. `find_by_id` takes the read lock and clones one record
//!
//! A reader therefore sees either the record before a concurrent `save` or
//! the one after it, never a mix. Lookups from many threads run in parallel.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tally_core::{CoreError, CoreResult, Member, MemberId, MemberStore};
use tracing::debug;

use crate::error::StoreResult;
use crate::seed::load_members_json;

/// In-memory [`MemberStore`].
///
/// ## Usage
/// ```rust
/// use tally_core::{Grade, Member, MemberId};
/// use tally_store::MemoryMemberStore;
///
/// let store = MemoryMemberStore::with_members([
///     Member::new(MemberId::new(1), "memberA", Grade::Vip),
///     Member::new(MemberId::new(2), "memberB", Grade::Basic),
/// ]);
/// assert_eq!(store.count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct MemoryMemberStore {
    members: RwLock<HashMap<MemberId, Member>>,
}

impl MemoryMemberStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryMemberStore::default()
    }

    /// Creates a store holding the given members. Later duplicates win.
    pub fn with_members(members: impl IntoIterator<Item = Member>) -> Self {
        let members = members.into_iter().map(|m| (m.id(), m)).collect();
        MemoryMemberStore {
            members: RwLock::new(members),
        }
    }

    /// Creates a store from a JSON member seed.
    ///
    /// See [`load_members_json`] for the accepted format.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let members = load_members_json(json)?;
        debug!(count = members.len(), "Loaded member seed");
        Ok(MemoryMemberStore::with_members(members))
    }

    /// Number of registered members.
    pub fn count(&self) -> usize {
        self.read().len()
    }

    /// Checks whether a member is registered under `id`.
    pub fn contains(&self, id: MemberId) -> bool {
        self.read().contains_key(&id)
    }

    // A poisoned lock still guards a consistent map: the only writes are
    // single `insert` calls, which cannot be observed half-done.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<MemberId, Member>> {
        self.members.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<MemberId, Member>> {
        self.members.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MemberStore for MemoryMemberStore {
    fn save(&self, member: Member) {
        debug!(member_id = %member.id(), grade = %member.grade(), "Saving member");
        let replaced = self.write().insert(member.id(), member);
        if let Some(old) = replaced {
            debug!(member_id = %old.id(), "Overwrote existing member");
        }
    }

    fn find_by_id(&self, id: MemberId) -> CoreResult<Member> {
        let found = self.read().get(&id).cloned();
        match found {
            Some(member) => Ok(member),
            None => {
                debug!(member_id = %id, "Member not found");
                Err(CoreError::MemberNotFound(id))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
