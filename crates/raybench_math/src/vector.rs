//! Vector helpers that glam does not provide with the exact semantics we need.

use crate::DVec3;

/// Large sentinel used both as the "no hit yet" distance and as the
/// normalization factor for zero-length vectors.
pub const FAR_AWAY: f64 = 1_000_000.0;

/// Euclidean length of `v`.
#[inline]
pub fn magnitude(v: DVec3) -> f64 {
    v.dot(v).sqrt()
}

/// Normalize `v` to unit length.
///
/// A zero vector is not an error: it is scaled by [`FAR_AWAY`] instead of
/// being divided by zero (which leaves it at zero). Non-zero vectors are
/// scaled by the reciprocal of their magnitude, not divided, so results match
/// reference renders bit for bit.
#[inline]
pub fn normalize(v: DVec3) -> DVec3 {
    let mag = magnitude(v);
    let div = if mag == 0.0 { FAR_AWAY } else { 1.0 / mag };
    v * div
}
