//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point world
//! coordinates and integer grid indices. Out-of-range and non-finite values
//! are clamped rather than rejected so the per-tick update stays infallible.

/// Convert a finite `f64` into `f32`, asserting that it fits the target type.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers assert that the value fits within f32 bounds."
)]
#[must_use]
pub fn expect_f32(value: f64) -> f32 {
    debug_assert!(value.is_finite(), "expected finite f64 for f32 conversion");
    debug_assert!(
        value <= f64::from(f32::MAX),
        "f64 value {value} exceeds f32::MAX"
    );
    debug_assert!(
        value >= f64::from(f32::MIN),
        "f64 value {value} is below f32::MIN"
    );
    value as f32
}

/// Convert a grid dimension or element count into `f32`.
#[expect(
    clippy::cast_precision_loss,
    reason = "Grid dimensions and flock sizes stay far below 2^24, so the conversion is exact."
)]
#[must_use]
pub fn len_to_f32(len: usize) -> f32 {
    debug_assert!(len < (1 << 24), "length {len} loses f32 precision");
    len as f32
}

/// Truncate `value` toward zero and clamp it into `0..len`.
///
/// Non-finite input maps to index `0`. An empty axis (`len == 0`) also maps
/// to `0`; callers validate their grids before lookup.
///
/// # Examples
/// ```
/// use flock::numeric::truncate_to_index;
/// assert_eq!(truncate_to_index(3.9, 10), 3);
/// assert_eq!(truncate_to_index(-0.7, 10), 0);
/// assert_eq!(truncate_to_index(42.0, 10), 9);
/// assert_eq!(truncate_to_index(f32::NAN, 10), 0);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The value is clamped into the index domain before casting."
)]
#[must_use]
pub fn truncate_to_index(value: f32, len: usize) -> usize {
    if !value.is_finite() || len == 0 {
        return 0;
    }
    let max_index = len_to_f32(len - 1);
    value.trunc().clamp(0.0, max_index) as usize
}
