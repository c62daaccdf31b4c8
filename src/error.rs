//! Non-fatal errors collected while extracting placement specifiers

use serde_json::Value;
use thiserror::Error;

/// Stable code for [`SpecifierError::InvalidSpecifier`], as emitted by the CLI
pub const ERR_INVALID_SPECIFIER: &str = "ERR_INVALID_SPECIFIER";

/// A specifier that could not be decoded.
///
/// These never abort a rearrangement: the offending specifier is skipped and
/// the record falls through to its next candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecifierError {
    #[error("invalid specifier '{tag}'")]
    InvalidSpecifier { tag: String },
}

impl SpecifierError {
    /// Create an invalid specifier error for the given tag
    pub fn invalid(tag: impl Into<String>) -> Self {
        Self::InvalidSpecifier { tag: tag.into() }
    }

    /// Build the error for a raw specifier value that failed to decode.
    ///
    /// An object is reported by its first key; an empty object or any other
    /// shape is reported by its compact JSON text.
    pub fn from_raw(raw: &Value) -> Self {
        match raw {
            Value::Object(map) => match map.keys().next() {
                Some(key) => Self::invalid(key.as_str()),
                None => Self::invalid(raw.to_string()),
            },
            other => Self::invalid(other.to_string()),
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidSpecifier { .. } => ERR_INVALID_SPECIFIER,
        }
    }

    /// The offending tag
    pub fn tag(&self) -> &str {
        match self {
            Self::InvalidSpecifier { tag } => tag,
        }
    }

    /// `[code, tag]` pair, the shape the CLI prints under `errors`
    pub fn to_pair(&self) -> Value {
        Value::Array(vec![
            Value::String(self.code().to_string()),
            Value::String(self.tag().to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_invalid_specifier_display() {
        let err = SpecifierError::invalid("above");
        assert_eq!(err.to_string(), "invalid specifier 'above'");
    }

    #[test]
    fn test_from_raw_single_key_uses_key() {
        let err = SpecifierError::from_raw(&json!({ "at": "first" }));
        assert_eq!(err.tag(), "at");
    }

    #[test]
    fn test_from_raw_multiple_keys_uses_first() {
        let err = SpecifierError::from_raw(&json!({ "sideways": 1, "at": 0 }));
        assert_eq!(err.tag(), "sideways");
    }

    #[test]
    fn test_from_raw_other_shapes_use_json_text() {
        assert_eq!(SpecifierError::from_raw(&json!(5)).tag(), "5");
        assert_eq!(SpecifierError::from_raw(&json!({})).tag(), "{}");
        assert_eq!(SpecifierError::from_raw(&json!([1])).tag(), "[1]");
    }

    #[test]
    fn test_to_pair() {
        let err = SpecifierError::invalid("above");
        assert_eq!(err.to_pair(), json!(["ERR_INVALID_SPECIFIER", "above"]));
    }
}
