use std::fmt;

use landing_forge_extract::{extract_json_slice, normalize_sections, parse_slice, MalformedResponse, Section};

use super::validate::validate_sections;
use crate::error::GenerationError;

/// Stages of a creation attempt. Any stage before `Persisted` can fail, and a
/// failure ends the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationStage {
    Requested,
    ExtractingJson,
    Parsing,
    Normalizing,
    Validating,
    Persisted,
}

impl CreationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CreationStage::Requested => "requested",
            CreationStage::ExtractingJson => "extracting_json",
            CreationStage::Parsing => "parsing",
            CreationStage::Normalizing => "normalizing",
            CreationStage::Validating => "validating",
            CreationStage::Persisted => "persisted",
        }
    }
}

impl fmt::Display for CreationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turn raw model text into a validated, canonical section list.
pub fn sections_from_response(raw: &str) -> Result<Vec<Section>, GenerationError> {
    let slice = extract_json_slice(raw).map_err(|err| {
        tracing::error!(raw_len = raw.len(), "no JSON object in model response");
        MalformedResponse::from(err)
    })?;

    let parsed = parse_slice(slice).map_err(|err| {
        tracing::error!(
            slice = err.slice(),
            error = %err,
            "failed to parse model response"
        );
        MalformedResponse::from(err)
    })?;

    let sections = normalize_sections(parsed);
    tracing::debug!(
        stage = %CreationStage::Normalizing,
        count = sections.len(),
        "normalized model response"
    );

    if let Err(err) = validate_sections(&sections) {
        tracing::error!(
            missing = ?err.missing,
            sections = ?sections,
            "model response missing required sections"
        );
        return Err(err.into());
    }

    Ok(sections)
}
