//! Bloch-vector derivation for single-qubit visualization.
//!
//! Upstream job records carry an optional `bloch` payload in one of two
//! encodings: a raw `[x, y, z]` vector, or a single-qubit statevector
//! flattened to a list of reals. This crate converts either encoding into a
//! [`BlochVector`] guaranteed to lie on or inside the unit sphere, which is
//! what the 3-D renderer expects.
//!
//! The conversion is a pure function: no I/O, no shared state, safe to call
//! from any number of render tasks at once.
//!
//! ```
//! use qorbit_bloch::{BlochDataKind, BlochPayload, process_bloch_data};
//!
//! let payload = BlochPayload {
//!     kind: BlochDataKind::Vector,
//!     data: vec![2.0, 0.0, 0.0],
//! };
//! let v = process_bloch_data(&payload).unwrap();
//! assert_eq!((v.x, v.y, v.z), (1.0, 0.0, 0.0));
//! ```

pub mod error;
pub mod payload;
pub mod processor;
pub mod vector;

pub use error::{BlochError, BlochResult};
pub use payload::{BlochDataKind, BlochPayload};
pub use processor::{process_bloch_data, statevector_to_bloch};
pub use vector::BlochVector;
