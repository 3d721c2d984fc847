use serde_json::Value;

use crate::slice::{extract_json_slice, SliceError};

/// The extracted slice is not valid JSON.
///
/// The offending slice is kept for diagnostics but is not part of the
/// `Display` output, so the message is safe to show to end users.
#[derive(Debug, thiserror::Error)]
#[error("failed to parse AI response: {source}")]
pub struct ParseError {
    slice: String,
    source: serde_json::Error,
}

impl ParseError {
    /// The text that failed to parse.
    pub fn slice(&self) -> &str {
        &self.slice
    }
}

/// No usable JSON could be recovered from a model response.
#[derive(Debug, thiserror::Error)]
pub enum MalformedResponse {
    #[error(transparent)]
    NoJsonObject(#[from] SliceError),
    #[error(transparent)]
    Unparseable(#[from] ParseError),
}

impl MalformedResponse {
    /// The slice that failed to parse, when extraction got that far.
    pub fn slice(&self) -> Option<&str> {
        match self {
            MalformedResponse::NoJsonObject(_) => None,
            MalformedResponse::Unparseable(err) => Some(err.slice()),
        }
    }
}

/// Parse an extracted slice into a generic JSON tree.
///
/// No repair is attempted: trailing commas, missing colons and the like are
/// terminal.
pub fn parse_slice(slice: &str) -> Result<Value, ParseError> {
    serde_json::from_str(slice).map_err(|source| ParseError {
        slice: slice.to_string(),
        source,
    })
}

/// Slice and parse a raw model response in one step.
pub fn parse_response(text: &str) -> Result<Value, MalformedResponse> {
    let slice = extract_json_slice(text)?;
    Ok(parse_slice(slice)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_well_formed_slice() {
        let value = parse_slice(r#"{"hero":{"title":"T"}}"#).unwrap();
        assert_eq!(value, json!({"hero": {"title": "T"}}));
    }

    #[test]
    fn trailing_comma_is_not_repaired() {
        let err = parse_slice(r#"{"hero":{"title":"T"},}"#).unwrap_err();
        assert_eq!(err.slice(), r#"{"hero":{"title":"T"},}"#);
        assert!(err.to_string().starts_with("failed to parse AI response"));
    }

    #[test]
    fn missing_colon_is_not_repaired() {
        assert!(parse_slice(r#"{"address" "somewhere"}"#).is_err());
    }

    #[test]
    fn response_with_prose_parses() {
        let text = "Sure! ```json\n{\"about\": {\"heading\": \"A\", \"text\": \"B\"}}\n```";
        let value = parse_response(text).unwrap();
        assert_eq!(value, json!({"about": {"heading": "A", "text": "B"}}));
    }

    #[test]
    fn response_without_braces_is_malformed() {
        let err = parse_response("just prose").unwrap_err();
        assert!(matches!(err, MalformedResponse::NoJsonObject(_)));
        assert_eq!(err.slice(), None);
        assert_eq!(err.to_string(), "no JSON object found in AI response");
    }

    #[test]
    fn merged_objects_fail_to_parse() {
        let err = parse_response(r#"{"a":1} and {"b":2}"#).unwrap_err();
        assert!(matches!(err, MalformedResponse::Unparseable(_)));
        assert_eq!(err.slice(), Some(r#"{"a":1} and {"b":2}"#));
    }

    #[test]
    fn display_does_not_echo_the_slice() {
        let err = parse_response("{ secret-provider-payload }").unwrap_err();
        assert!(!err.to_string().contains("secret-provider-payload"));
    }
}
