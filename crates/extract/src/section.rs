use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the discriminating field in the serialized form.
pub const TYPE_FIELD: &str = "type";

/// Field that holds a non-mapping value when a keyed object is normalized.
pub const VALUE_FIELD: &str = "value";

/// A templated block of landing-page content.
///
/// Only `type` is structural. Everything else is open-ended content that
/// varies by industry and is carried through untouched, in its original order.
/// Entries of a stored sequence that carry no string `type` are kept verbatim
/// as [`Section::Untyped`]; they never satisfy the required-type check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section {
    Typed {
        #[serde(rename = "type")]
        section_type: String,
        #[serde(flatten)]
        fields: Map<String, Value>,
    },
    Untyped(Value),
}

impl Section {
    pub fn new(section_type: impl Into<String>) -> Self {
        Section::Typed {
            section_type: section_type.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field insertion on a typed section. A `type` key is
    /// ignored, and untyped entries are returned unchanged.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Section::Typed { fields, .. } = &mut self {
            let key = key.into();
            if key != TYPE_FIELD {
                fields.insert(key, value.into());
            }
        }
        self
    }

    pub fn section_type(&self) -> Option<&str> {
        match self {
            Section::Typed { section_type, .. } => Some(section_type),
            Section::Untyped(_) => None,
        }
    }

    /// Content fields of a typed section, without `type`.
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        match self {
            Section::Typed { fields, .. } => Some(fields),
            Section::Untyped(_) => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Section::Typed { fields, .. } => fields.get(key),
            Section::Untyped(value) => value.get(key),
        }
    }
}
