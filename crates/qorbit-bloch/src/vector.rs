//! The Bloch vector value type.

use serde::{Deserialize, Serialize};

/// A point on or inside the Bloch unit sphere.
///
/// Produced fresh by each conversion; never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// X component (equatorial, |+⟩ axis).
    pub x: f64,
    /// Y component (equatorial, |+i⟩ axis).
    pub y: f64,
    /// Z component (polar, |0⟩ axis).
    pub z: f64,
}

impl BlochVector {
    /// Create a vector without normalization.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean magnitude.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Clamp the vector into the physically valid region.
    ///
    /// - Zero magnitude maps to the canonical |0⟩ state `(0, 0, 1)` rather
    ///   than being left undefined (and avoids dividing by zero).
    /// - Magnitude at most 1 is returned unchanged; points already inside
    ///   the sphere come from trusted upstream floats.
    /// - Magnitude above 1 is rescaled onto the sphere surface, so upstream
    ///   rounding error cannot place a point outside the valid region.
    #[must_use]
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();

        if magnitude == 0.0 {
            return Self::new(0.0, 0.0, 1.0);
        }
        if magnitude <= 1.0 {
            return self;
        }

        Self {
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
        }
    }
}
