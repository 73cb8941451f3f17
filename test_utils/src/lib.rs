//! Shared fixtures for the flock test suites.
//!
//! Builders for common terrains and boids, plus a vector assertion with a
//! readable failure message.

use flock::{Boid, HeightField};
use glam::Vec3;

/// Samples per side of the fixture terrains. With `xy_scale = 1` the world
/// spans `-32.0..=32.0` in X and Y.
pub const FIXTURE_GRID: usize = 65;

/// Build a boid from position and velocity arrays.
///
/// # Examples
/// ```
/// use test_utils::boid;
/// let b = boid([1.0, 2.0, 3.0], [0.0, 0.0, 0.0]);
/// assert_eq!(b.position.y, 2.0);
/// ```
pub fn boid(position: [f32; 3], velocity: [f32; 3]) -> Boid {
    Boid::new(Vec3::from_array(position), Vec3::from_array(velocity))
}

/// Flat fixture terrain at `height`.
///
/// # Panics
/// Never for the fixed fixture size.
pub fn flat_ground(height: f32) -> HeightField {
    HeightField::flat(FIXTURE_GRID, FIXTURE_GRID, height)
        .unwrap_or_else(|e| panic!("fixture terrain rejected: {e}"))
}

/// Fixture terrain split along X: columns below `shore_column` sit at
/// `land`, the rest at `seabed`.
///
/// # Panics
/// Never for the fixed fixture size.
pub fn coastline(shore_column: usize, land: f32, seabed: f32) -> HeightField {
    HeightField::from_fn(FIXTURE_GRID, FIXTURE_GRID, |x, _| {
        if x < shore_column {
            land
        } else {
            seabed
        }
    })
    .unwrap_or_else(|e| panic!("fixture terrain rejected: {e}"))
}

/// Assert that `actual` is within `tolerance` of `expected` on every axis.
///
/// # Panics
/// Panics naming both vectors when any component differs by more than
/// `tolerance`.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, tolerance: f32) {
    assert!(
        actual.abs_diff_eq(expected, tolerance),
        "expected {expected:?} (±{tolerance}), got {actual:?}"
    );
}
