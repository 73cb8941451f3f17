//! Flocking tuning constants shared by every boid.
//!
//! These values are fixed at compile time. Several of them are declared for
//! completeness but are not consulted by the update logic; they are marked as
//! such below.

/// Largest horizontal speed a boid is meant to reach.
///
/// Not enforced: boid velocities are never clamped.
pub const MAX_SPEED_XY: f32 = 20.0;
/// Largest vertical speed a boid is meant to reach.
///
/// Not enforced: boid velocities are never clamped.
pub const MAX_SPEED_Z: f32 = 10.0;
/// Magnitude of the fixed steering nudges (terrain avoidance, cohesion).
pub const MAX_ACCELERATION: f32 = 5.0;
/// Cruising speed each boid steers towards.
pub const DESIRED_SPEED: f32 = 10.0;
/// Distance at which cohesion turns into repulsion.
pub const DESIRED_SEPARATION: f32 = 1.0;
/// Minimum clearance above the terrain.
///
/// Terrain avoidance compares against this single value: below it the boid
/// climbs, above it the boid descends.
pub const DESIRED_HEIGHT: f32 = 1.0;
/// Upper end of the preferred clearance band. Never compared.
pub const DESIRED_HEIGHT_CEILING: f32 = 4.0;
/// Preferred distance from the water line. Never compared.
pub const DESIRED_WATER_DISTANCE: f32 = 1.0;
/// Neighbours at or beyond this distance are invisible.
pub const MAX_PERCEPTION_DISTANCE: f32 = 20.0;
/// Magnitudes at or below this are treated as zero.
pub const ZERO_TOLERANCE: f32 = 1.0e-6;
