//! Behavioural tests for the public vector helpers.

use approx::assert_relative_eq;
use flock::vector_math::{is_close_to_zero, normalize_or, scale_to_length};
use glam::Vec3;

#[test]
fn normalise_drops_nan_vectors() {
    assert_eq!(normalize_or(Vec3::new(f32::NAN, 1.0, 0.0), Vec3::ZERO), Vec3::ZERO);
}

#[test]
fn normalise_keeps_direction() {
    let unit = normalize_or(Vec3::new(0.0, -4.0, 3.0), Vec3::X);
    assert_relative_eq!(unit.x, 0.0);
    assert_relative_eq!(unit.y, -0.8);
    assert_relative_eq!(unit.z, 0.6);
    assert_relative_eq!(unit.length(), 1.0, epsilon = 1e-6);
}

#[test]
fn tiny_vectors_fall_back() {
    let tiny = Vec3::splat(1e-8);
    assert!(is_close_to_zero(tiny.length()));
    assert_eq!(normalize_or(tiny, Vec3::Y), Vec3::Y);
    assert_eq!(scale_to_length(tiny, 10.0, Vec3::X), Vec3::new(10.0, 0.0, 0.0));
}
