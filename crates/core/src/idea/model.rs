use chrono::{DateTime, Utc};
use landing_forge_extract::Section;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::IdeaId;

/// A user prompt together with the landing-page sections generated for it.
/// `sections` is always in canonical (sequence) form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: IdeaId,
    pub prompt: String,
    pub sections: Vec<Section>,
    pub created_at: DateTime<Utc>,
}

/// An idea exactly as the store holds it.
///
/// `sections` stays untyped: older records stored a keyed object instead of a
/// sequence and must survive until read repair.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredIdea {
    pub id: IdeaId,
    pub prompt: String,
    pub sections: Value,
    pub created_at: DateTime<Utc>,
}
