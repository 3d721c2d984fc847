//! Read-time tolerance for records written before `sections` was a sequence.
//!
//! Early records stored `sections` as a keyed object (`{"hero": {...}}`).
//! They are repaired in memory on every read and never re-validated, so a
//! historical record missing a required section is still returned. Records
//! already stored as a sequence come back element for element, untyped
//! entries included. The stored record is left as it is.

use landing_forge_extract::normalize_sections;

use super::model::{Idea, StoredIdea};

/// Bring a stored record into canonical shape.
pub fn repair_stored_idea(stored: StoredIdea) -> Idea {
    let StoredIdea {
        id,
        prompt,
        sections,
        created_at,
    } = stored;

    if !sections.is_array() {
        tracing::warn!(idea_id = %id, "normalizing legacy sections object");
    }

    Idea {
        id,
        prompt,
        sections: normalize_sections(sections),
        created_at,
    }
}
