/// Locates the JSON object embedded in free-form model output.
///
/// Models wrap their answer in prose or markdown fences often enough that the
/// raw text cannot be handed to a JSON parser directly. The slice runs from the
/// first `{` to the last `}` inclusive. This is not a balanced-brace scanner:
/// two independent objects in the same text come back as one slice spanning
/// both, and the parser will usually reject it.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SliceError {
    #[error("no JSON object found in AI response")]
    NoJsonObject,
}

/// Return the substring from the first `{` to the last `}`, inclusive.
pub fn extract_json_slice(text: &str) -> Result<&str, SliceError> {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => Ok(&text[start..=end]),
        _ => Err(SliceError::NoJsonObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_object() {
        assert_eq!(extract_json_slice(r#"{"a":1}"#).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn object_wrapped_in_prose() {
        let text = "  Here you go:\n{\"hero\":{\"title\":\"T\"}}\nEnjoy!";
        assert_eq!(extract_json_slice(text).unwrap(), "{\"hero\":{\"title\":\"T\"}}");
    }

    #[test]
    fn object_inside_markdown_fence() {
        let text = "```json\n{\"about\": {\"heading\": \"A\"}}\n```";
        assert_eq!(
            extract_json_slice(text).unwrap(),
            "{\"about\": {\"heading\": \"A\"}}"
        );
    }

    #[test]
    fn non_ascii_prose_around_object() {
        let text = "Voilà ✨ {\"hero\":{\"title\":\"Café\"}} fin";
        assert_eq!(
            extract_json_slice(text).unwrap(),
            "{\"hero\":{\"title\":\"Café\"}}"
        );
    }

    #[test]
    fn no_braces() {
        assert_eq!(
            extract_json_slice("I could not come up with anything."),
            Err(SliceError::NoJsonObject)
        );
    }

    #[test]
    fn only_opening_brace() {
        assert_eq!(extract_json_slice("{ oops"), Err(SliceError::NoJsonObject));
    }

    #[test]
    fn only_closing_brace() {
        assert_eq!(extract_json_slice("oops }"), Err(SliceError::NoJsonObject));
    }

    #[test]
    fn closing_before_opening() {
        assert_eq!(extract_json_slice("} and then {"), Err(SliceError::NoJsonObject));
    }

    #[test]
    fn empty_text() {
        assert_eq!(extract_json_slice(""), Err(SliceError::NoJsonObject));
    }

    #[test]
    fn two_objects_are_merged_into_one_slice() {
        let text = r#"first {"a":1} then {"b":2} done"#;
        assert_eq!(extract_json_slice(text).unwrap(), r#"{"a":1} then {"b":2}"#);
    }
}
