use serde_json::{Map, Value};

use crate::section::{Section, TYPE_FIELD, VALUE_FIELD};

/// Convert a parsed model response, or a stored `sections` value, into the
/// canonical ordered list of sections.
///
/// - A sequence is already canonical and is returned unchanged. Elements that
///   carry a string `type` become typed sections; anything else is kept
///   verbatim as an untyped entry.
/// - A keyed mapping yields one section per key, in insertion order. The key
///   becomes the `type`. A mapping value is merged in as the section's fields,
///   any other value is stored under `value`.
/// - Scalars and `null` yield no sections.
///
/// Never fails. The same law serves fresh model output and legacy records.
pub fn normalize_sections(value: Value) -> Vec<Section> {
    match value {
        Value::Array(items) => items.into_iter().map(section_from_element).collect(),
        Value::Object(map) => map
            .into_iter()
            .map(|(key, content)| section_from_entry(key, content))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Vec::new(),
    }
}

fn section_from_element(item: Value) -> Section {
    let section_type = item.get(TYPE_FIELD).and_then(Value::as_str).map(str::to_owned);
    match (section_type, item) {
        (Some(section_type), Value::Object(mut fields)) => {
            fields.shift_remove(TYPE_FIELD);
            Section::Typed {
                section_type,
                fields,
            }
        }
        (_, other) => {
            tracing::warn!("sections element has no string type; keeping it verbatim");
            Section::Untyped(other)
        }
    }
}

fn section_from_entry(key: String, content: Value) -> Section {
    if key.is_empty() {
        tracing::warn!("sections mapping has an empty key; section type will be empty");
    }
    let fields = match content {
        Value::Object(mut inner) => {
            // The key names the section; an inner `type` would contradict it.
            inner.shift_remove(TYPE_FIELD);
            inner
        }
        other => {
            let mut fields = Map::new();
            fields.insert(VALUE_FIELD.to_string(), other);
            fields
        }
    };
    Section::Typed {
        section_type: key,
        fields,
    }
}
