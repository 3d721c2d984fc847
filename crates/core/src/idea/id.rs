use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a persisted idea.
///
/// Assigned by the store. Callers hand it back as text, so parsing is the only
/// place an identifier can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdeaId(Uuid);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid idea id: {0:?}")]
pub struct InvalidIdeaId(String);

impl IdeaId {
    /// A fresh, time-ordered identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse a caller-supplied identifier.
    pub fn parse(id: &str) -> Result<Self, InvalidIdeaId> {
        Uuid::parse_str(id.trim())
            .map(Self)
            .map_err(|_| InvalidIdeaId(id.to_string()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for IdeaId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for IdeaId {
    type Err = InvalidIdeaId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
