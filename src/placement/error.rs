//! Error types for placement resolution

use thiserror::Error;

/// Errors that abort a rearrangement
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Anchors that loop back onto themselves
    #[error("circular anchor chain: {}", cycle.join(" -> "))]
    CyclicAnchor { cycle: Vec<String> },

    /// Record without a string or numeric identifier
    #[error("record at index {index} has no usable identifier")]
    MissingIdentifier { index: usize },

    /// Two records share an identifier
    #[error("duplicate identifier '{id}'")]
    DuplicateIdentifier { id: String },
}

impl PlacementError {
    /// Create a cyclic anchor error
    pub fn cyclic(cycle: Vec<String>) -> Self {
        Self::CyclicAnchor { cycle }
    }

    /// Create a missing identifier error
    pub fn missing_identifier(index: usize) -> Self {
        Self::MissingIdentifier { index }
    }

    /// Create a duplicate identifier error
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateIdentifier { id: id.into() }
    }

    /// The identifiers along the loop, for cyclic anchor errors
    pub fn cycle(&self) -> Option<&[String]> {
        match self {
            Self::CyclicAnchor { cycle } => Some(cycle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_anchor_display() {
        let err = PlacementError::cyclic(vec!["a".to_string(), "b".to_string(), "a".to_string()]);
        assert!(err.to_string().contains("a -> b -> a"));
        assert_eq!(err.cycle().map(|c| c.len()), Some(3));
    }

    #[test]
    fn test_missing_identifier_display() {
        let err = PlacementError::missing_identifier(4);
        assert!(err.to_string().contains("index 4"));
        assert_eq!(err.cycle(), None);
    }

    #[test]
    fn test_duplicate_display() {
        let err = PlacementError::duplicate("a");
        assert_eq!(err.to_string(), "duplicate identifier 'a'");
    }
}
