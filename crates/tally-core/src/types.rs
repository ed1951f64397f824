//! # Domain Types
//!
//! Member-side domain types used throughout Tally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Member      │   │     Grade       │   │   MemberStore   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (MemberId)  │   │  Basic          │   │  save           │       │
//! │  │  name           │   │  Vip            │   │  find_by_id     │       │
//! │  │  grade          │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders point at members by [`MemberId`] only. The store is the sole owner
//! of member records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreResult, ValidationError};

// =============================================================================
// Member ID
// =============================================================================

/// Identifier of a registered member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        MemberId(id)
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MemberId {
    fn from(id: i64) -> Self {
        MemberId(id)
    }
}

// =============================================================================
// Grade
// =============================================================================

/// Loyalty grade of a member. Decides discount eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Basic,
    Vip,
}

impl Grade {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Grade::Basic => "BASIC",
            Grade::Vip => "VIP",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `basic` / `vip` in any case.
impl FromStr for Grade {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BASIC" => Ok(Grade::Basic),
            "VIP" => Ok(Grade::Vip),
            other => Err(ValidationError::InvalidFormat {
                field: "grade".to_string(),
                reason: format!("unknown grade '{}', expected BASIC or VIP", other),
            }),
        }
    }
}

// =============================================================================
// Member
// =============================================================================

/// A registered customer.
///
/// Immutable after creation: fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    grade: Grade,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>, grade: Grade) -> Self {
        Member {
            id,
            name: name.into(),
            grade,
        }
    }

    #[inline]
    pub fn id(&self) -> MemberId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn grade(&self) -> Grade {
        self.grade
    }

    #[inline]
    pub fn is_vip(&self) -> bool {
        self.grade == Grade::Vip
    }
}

// =============================================================================
// Member Store
// =============================================================================

/// Registry of members keyed by [`MemberId`].
///
/// ## Contract
/// - `save` inserts or silently overwrites the record at `member.id()`
/// - `find_by_id` returns the member or [`CoreError::MemberNotFound`], and
///   fails for no other reason
/// - A concurrent `save` and `find_by_id` on the same ID must be
///   linearizable: the reader sees the whole old record or the whole new one
///
/// [`CoreError::MemberNotFound`]: crate::CoreError::MemberNotFound
pub trait MemberStore: Send + Sync {
    fn save(&self, member: Member);

    fn find_by_id(&self, id: MemberId) -> CoreResult<Member>;
}

// =============================================================================
// Unit Tests
// =============================================================================
