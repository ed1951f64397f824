//! # Member Seeds
//!
//! Loads members from JSON so a store can start pre-populated.
//!
//! ## Format
//! ```json
//! [
//!   { "id": 1, "name": "memberA", "grade": "VIP" },
//!   { "id": 2, "name": "memberB", "grade": "basic" }
//! ]
//! ```
//! Grades are case-insensitive. IDs must be unique within one seed.

use std::collections::HashSet;

use serde::Deserialize;
use tally_core::validation::validate_member_name;
use tally_core::{Grade, Member, MemberId};

use crate::error::{StoreError, StoreResult};

#[derive(Debug, Deserialize)]
struct SeedMember {
    id: i64,
    name: String,
    grade: String,
}

/// Parses and validates a JSON member seed.
///
/// ## Errors
/// [`StoreError::InvalidSeed`] for malformed JSON, an empty name, an unknown
/// grade or a repeated ID. The message names the offending ID.
///
/// ## Example
/// ```rust
/// use tally_store::load_members_json;
///
/// let members = load_members_json(r#"[{"id": 1, "name": "memberA", "grade": "vip"}]"#).unwrap();
/// assert!(members[0].is_vip());
/// ```
pub fn load_members_json(json: &str) -> StoreResult<Vec<Member>> {
    let raw: Vec<SeedMember> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(raw.len());

    raw.into_iter()
        .map(|entry| -> StoreResult<Member> {
            if !seen.insert(entry.id) {
                return Err(StoreError::invalid_seed(format!(
                    "member {} listed more than once",
                    entry.id
                )));
            }

            validate_member_name(&entry.name)
                .map_err(|e| StoreError::invalid_seed(format!("member {}: {}", entry.id, e)))?;

            let grade: Grade = entry
                .grade
                .parse()
                .map_err(|e| StoreError::invalid_seed(format!("member {}: {}", entry.id, e)))?;

            Ok(Member::new(MemberId::from(entry.id), entry.name.trim(), grade))
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
