//! The wire shape of upstream `bloch` payloads.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag discriminating the two upstream encodings.
///
/// Unrecognized tags are preserved verbatim in [`BlochDataKind::Other`] so
/// the processor can report them by name instead of failing at
/// deserialization time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlochDataKind {
    /// Raw `[x, y, z]` components.
    Vector,
    /// Flattened single-qubit statevector.
    Statevector,
    /// Anything else the upstream API may start emitting.
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for BlochDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlochDataKind::Vector => f.write_str("vector"),
            BlochDataKind::Statevector => f.write_str("statevector"),
            BlochDataKind::Other(tag) => f.write_str(tag),
        }
    }
}

/// An upstream `bloch` payload, as found on a job-details record.
///
/// `kind` determines how `data` is interpreted; see
/// [`process_bloch_data`](crate::process_bloch_data). Immutable input, owned
/// by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlochPayload {
    /// Encoding tag (`"type"` on the wire).
    #[serde(rename = "type")]
    pub kind: BlochDataKind,
    /// Ordered sequence of real components.
    pub data: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_payload_deserializes() {
        let payload: BlochPayload =
            serde_json::from_str(r#"{"type": "vector", "data": [0.2, -0.1, 0.97]}"#).unwrap();
        assert_eq!(payload.kind, BlochDataKind::Vector);
        assert_eq!(payload.data, vec![0.2, -0.1, 0.97]);
    }

    #[test]
    fn test_statevector_payload_deserializes() {
        let payload: BlochPayload =
            serde_json::from_str(r#"{"type": "statevector", "data": [1.0, 0.0, 0.0, 0.0]}"#)
                .unwrap();
        assert_eq!(payload.kind, BlochDataKind::Statevector);
        assert_eq!(payload.data.len(), 4);
    }

    #[test]
    fn test_unknown_tag_lands_in_other() {
        let payload: BlochPayload =
            serde_json::from_str(r#"{"type": "density_matrix", "data": [1.0]}"#).unwrap();
        assert_eq!(payload.kind, BlochDataKind::Other("density_matrix".into()));
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&BlochPayload {
            kind: BlochDataKind::Statevector,
            data: vec![1.0, 0.0],
        })
        .unwrap();
        assert!(json.contains(r#""type":"statevector""#));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(BlochDataKind::Vector.to_string(), "vector");
        assert_eq!(BlochDataKind::Other("foo".into()).to_string(), "foo");
    }
}
