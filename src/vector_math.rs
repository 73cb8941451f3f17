//! Basic vector math helper functions.
//! Tolerance-aware magnitudes and normalisation on top of [`glam::Vec3`].
use glam::Vec3;

use crate::ZERO_TOLERANCE;

/// Returns `true` when `value` is within [`ZERO_TOLERANCE`] of zero.
///
/// # Examples
/// ```
/// use flock::vector_math::is_close_to_zero;
/// assert!(is_close_to_zero(1.0e-9));
/// assert!(!is_close_to_zero(0.01));
/// ```
#[must_use]
pub fn is_close_to_zero(value: f32) -> bool {
    value.abs() <= ZERO_TOLERANCE
}

/// Returns the unit vector along `vector`, or `fallback` when `vector` is too
/// short (or not finite) to have a direction.
///
/// # Examples
/// ```
/// use flock::vector_math::normalize_or;
/// use glam::Vec3;
///
/// let unit = normalize_or(Vec3::new(0.0, 3.0, 4.0), Vec3::X);
/// assert!((unit.z - 0.8).abs() < 1e-6);
/// assert_eq!(normalize_or(Vec3::ZERO, Vec3::Y), Vec3::Y);
/// ```
#[must_use]
pub fn normalize_or(vector: Vec3, fallback: Vec3) -> Vec3 {
    if !vector.is_finite() {
        return fallback;
    }
    let length = vector.length();
    if is_close_to_zero(length) {
        fallback
    } else {
        vector / length
    }
}

/// Rescales `vector` to `length`, pointing along `fallback` when `vector` has
/// no usable direction.
#[must_use]
pub fn scale_to_length(vector: Vec3, length: f32, fallback: Vec3) -> Vec3 {
    normalize_or(vector, fallback) * length
}
