//! Payload-to-vector conversion.

use num_complex::Complex64;

use crate::error::{BlochError, BlochResult};
use crate::payload::{BlochDataKind, BlochPayload};
use crate::vector::BlochVector;

/// Convert an upstream Bloch payload into a vector on or inside the unit
/// sphere.
///
/// - `vector` payloads need at least 3 components; elements past the third
///   are ignored.
/// - `statevector` payloads are decoded via [`statevector_to_bloch`].
/// - Any other tag is rejected by name.
///
/// Every result passes through [`BlochVector::normalized`], so the returned
/// vector always satisfies `x² + y² + z² ≤ 1` and the zero vector maps to
/// the |0⟩ pole.
pub fn process_bloch_data(payload: &BlochPayload) -> BlochResult<BlochVector> {
    match &payload.kind {
        BlochDataKind::Vector => {
            if payload.data.len() < 3 {
                return Err(BlochError::VectorTooShort);
            }
            Ok(BlochVector::new(payload.data[0], payload.data[1], payload.data[2]).normalized())
        }
        BlochDataKind::Statevector => Ok(statevector_to_bloch(&payload.data)?.normalized()),
        BlochDataKind::Other(tag) => Err(BlochError::UnsupportedKind(tag.clone())),
    }
}

/// Derive the raw (unnormalized) Bloch vector of |ψ⟩ = α|0⟩ + β|1⟩ from a
/// flattened statevector.
///
/// Components: x = 2·Re(α*β), y = 2·Im(α*β), z = |α|² − |β|².
pub fn statevector_to_bloch(data: &[f64]) -> BlochResult<BlochVector> {
    let (alpha, beta) = decode_amplitudes(data)?;

    // α*β carries both equatorial components: Re → x/2, Im → y/2.
    let cross = alpha.conj() * beta;

    Ok(BlochVector::new(
        2.0 * cross.re,
        2.0 * cross.im,
        alpha.norm_sqr() - beta.norm_sqr(),
    ))
}

/// Decode the amplitude pair (α, β) from a flat list of reals.
///
/// Priority order:
/// 1. exactly 4 elements → `[Re α, Im α, Re β, Im β]`
/// 2. exactly 2 elements → `[Re α, Re β]`, imaginary parts zero
/// 3. any other length ≥ 2 → first up-to-4 elements positionally, missing
///    trailing elements treated as zero
///
/// The third form matches observed upstream behavior for odd-length
/// payloads; such lengths usually indicate a malformed record rather than a
/// genuine 2-amplitude state, but they are decoded rather than rejected.
fn decode_amplitudes(data: &[f64]) -> BlochResult<(Complex64, Complex64)> {
    match data.len() {
        0 | 1 => Err(BlochError::StatevectorTooShort),
        2 => Ok((
            Complex64::new(data[0], 0.0),
            Complex64::new(data[1], 0.0),
        )),
        4 => Ok((
            Complex64::new(data[0], data[1]),
            Complex64::new(data[2], data[3]),
        )),
        _ => {
            let at = |i: usize| data.get(i).copied().unwrap_or(0.0);
            Ok((
                Complex64::new(at(0), at(1)),
                Complex64::new(at(2), at(3)),
            ))
        }
    }
}
