//! Error types for Bloch payload processing.

use thiserror::Error;

/// Result type for Bloch conversions.
pub type BlochResult<T> = Result<T, BlochError>;

/// A malformed Bloch payload.
///
/// Each variant names the precondition that failed. The transform is
/// stateless, so retrying with the same input is pointless; callers are
/// expected to surface the message and discard the payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlochError {
    /// A `vector` payload with fewer than three components.
    #[error("Bloch vector must have 3 components [x, y, z]")]
    VectorTooShort,

    /// A `statevector` payload with fewer than two components.
    #[error("Statevector must have at least 2 components for single qubit")]
    StatevectorTooShort,

    /// A payload whose `type` tag is neither `vector` nor `statevector`.
    #[error("Unsupported Bloch data type: {0}")]
    UnsupportedKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_too_short_display() {
        let err = BlochError::VectorTooShort;
        assert_eq!(err.to_string(), "Bloch vector must have 3 components [x, y, z]");
    }

    #[test]
    fn test_statevector_too_short_display() {
        let err = BlochError::StatevectorTooShort;
        assert_eq!(
            err.to_string(),
            "Statevector must have at least 2 components for single qubit"
        );
    }

    #[test]
    fn test_unsupported_kind_names_the_tag() {
        let err = BlochError::UnsupportedKind("density_matrix".into());
        assert_eq!(err.to_string(), "Unsupported Bloch data type: density_matrix");
    }
}
