use std::collections::HashSet;

use landing_forge_extract::Section;
use thiserror::Error;

/// Section types every newly created idea must contain.
pub const REQUIRED_SECTION_TYPES: [&str; 3] = ["hero", "about", "contact"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("AI response missing required sections: {}", .missing.join(", "))]
pub struct MissingRequiredSections {
    /// Absent types, in the order of [`REQUIRED_SECTION_TYPES`].
    pub missing: Vec<&'static str>,
}

/// Check that every required section type is present.
///
/// Order, duplicates, extra section types and untyped entries are not
/// constrained, and inner fields are never inspected. Only runs when an idea is created.
pub fn validate_sections(sections: &[Section]) -> Result<(), MissingRequiredSections> {
    let present: HashSet<&str> = sections.iter().filter_map(Section::section_type).collect();
    let missing: Vec<&'static str> = REQUIRED_SECTION_TYPES
        .into_iter()
        .filter(|required| !present.contains(required))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingRequiredSections { missing })
    }
}
