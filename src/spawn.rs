//! Initial flock population.
//!
//! Boids start in a small box around the world origin with random headings
//! of up to cruise speed. Population is the driver's concern; the simulation
//! itself never adds or removes boids.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::boid::Boid;
use crate::flock::Flock;
use crate::DESIRED_SPEED;

/// Ranges used to scatter a new flock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Number of boids to create.
    pub count: usize,
    /// Boids start within `±position_half_range` grid cells of the origin in
    /// X and Y.
    pub position_half_range: f32,
    /// Starting altitude range, in world units.
    pub height_range: (f32, f32),
    /// Horizontal velocity components lie within `±factor * DESIRED_SPEED`.
    pub horizontal_speed_factor: f32,
    /// Vertical velocity lies within `±factor * DESIRED_SPEED`.
    pub vertical_speed_factor: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            count: 100,
            position_half_range: 5.0,
            height_range: (0.0, 1.0),
            horizontal_speed_factor: 1.0,
            vertical_speed_factor: 0.1,
        }
    }
}

/// Scatters `config.count` boids using `rng`.
///
/// Horizontal positions are scaled by `xy_scale` so the spawn box covers the
/// same number of terrain cells whatever the world size.
pub fn spawn_flock<R: Rng>(config: &SpawnConfig, xy_scale: f32, rng: &mut R) -> Flock {
    (0..config.count)
        .map(|_| spawn_boid(config, xy_scale, rng))
        .collect()
}

/// Scatters a flock from a fixed seed. The same seed always yields the same
/// flock.
///
/// # Examples
/// ```
/// use flock::spawn::{seeded_flock, SpawnConfig};
/// let config = SpawnConfig { count: 8, ..SpawnConfig::default() };
/// assert_eq!(seeded_flock(&config, 1.0, 3), seeded_flock(&config, 1.0, 3));
/// ```
#[must_use]
pub fn seeded_flock(config: &SpawnConfig, xy_scale: f32, seed: u64) -> Flock {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    spawn_flock(config, xy_scale, &mut rng)
}

fn spawn_boid<R: Rng>(config: &SpawnConfig, xy_scale: f32, rng: &mut R) -> Boid {
    let position = Vec3::new(
        symmetric(rng, config.position_half_range) * xy_scale,
        symmetric(rng, config.position_half_range) * xy_scale,
        between(rng, config.height_range.0, config.height_range.1),
    );
    let velocity = Vec3::new(
        symmetric(rng, config.horizontal_speed_factor) * DESIRED_SPEED,
        symmetric(rng, config.horizontal_speed_factor) * DESIRED_SPEED,
        symmetric(rng, config.vertical_speed_factor) * DESIRED_SPEED,
    );
    Boid::new(position, velocity)
}

fn symmetric<R: Rng>(rng: &mut R, half_range: f32) -> f32 {
    between(rng, -half_range, half_range)
}

// `gen_range` panics on empty or unbounded ranges, so those collapse to `low`.
fn between<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low && (high - low).is_finite() {
        rng.gen_range(low..high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_respects_ranges() {
        let config = SpawnConfig::default();
        let flock = seeded_flock(&config, 2.0, 11);
        assert_eq!(flock.len(), 100);
        for boid in &flock {
            assert!(boid.position.x.abs() <= 10.0 && boid.position.y.abs() <= 10.0);
            assert!((0.0..=1.0).contains(&boid.position.z));
            assert!(boid.velocity.x.abs() <= DESIRED_SPEED);
            assert!(boid.velocity.z.abs() <= DESIRED_SPEED * 0.1);
        }
    }

    #[test]
    fn zero_width_ranges_are_allowed() {
        let config = SpawnConfig {
            count: 3,
            position_half_range: 0.0,
            height_range: (2.0, 2.0),
            horizontal_speed_factor: 0.0,
            vertical_speed_factor: 0.0,
        };
        let flock = seeded_flock(&config, 1.0, 0);
        assert!(flock
            .iter()
            .all(|b| *b == Boid::new(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO)));
    }

    #[test]
    fn overflowing_ranges_collapse_instead_of_panicking() {
        let config = SpawnConfig {
            count: 4,
            position_half_range: 3.0e38,
            height_range: (-3.0e38, 3.0e38),
            horizontal_speed_factor: f32::INFINITY,
            vertical_speed_factor: f32::NAN,
        };
        let flock = seeded_flock(&config, 1.0, 5);
        assert_eq!(flock.len(), 4);
        for boid in &flock {
            assert_eq!(boid.position, Vec3::new(-3.0e38, -3.0e38, -3.0e38));
            assert_eq!(boid.velocity.x, f32::NEG_INFINITY);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let config = SpawnConfig::default();
        assert_ne!(seeded_flock(&config, 1.0, 1), seeded_flock(&config, 1.0, 2));
    }
}
