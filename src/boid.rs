//! A single flocking agent.
//!
//! Each tick a boid sums four steering contributions (cruise, terrain
//! avoidance, alignment and cohesion), adds the sum straight onto its
//! velocity, moves by `velocity * dt` and wraps around the world edges. If
//! the move lands it over water the horizontal part of the move is reversed.
//!
//! Alignment and cohesion look at a single neighbour: the closest boid within
//! [`MAX_PERCEPTION_DISTANCE`].

use glam::Vec3;
use log::trace;

use crate::vector_math::{is_close_to_zero, scale_to_length};
use crate::world::World;
use crate::{
    DESIRED_HEIGHT, DESIRED_SEPARATION, DESIRED_SPEED, MAX_ACCELERATION, MAX_PERCEPTION_DISTANCE,
};

/// Read-only view of the flock as seen by one boid.
///
/// The view optionally hides one index, which is how a boid leaves itself
/// out of its own neighbour search.
#[derive(Debug, Clone, Copy)]
pub struct Neighbours<'a> {
    boids: &'a [Boid],
    skip: Option<usize>,
}

impl<'a> Neighbours<'a> {
    /// Every boid in `boids` is a candidate, including the caller if it is in
    /// the slice.
    #[must_use]
    pub const fn including_self(boids: &'a [Boid]) -> Self {
        Self { boids, skip: None }
    }

    /// Every boid in `boids` except the one at `index`.
    #[must_use]
    pub const fn excluding(boids: &'a [Boid], index: usize) -> Self {
        Self {
            boids,
            skip: Some(index),
        }
    }

    /// Candidates in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Boid> + 'a {
        let Self { boids, skip } = *self;
        boids
            .iter()
            .enumerate()
            .filter(move |(index, _)| Some(*index) != skip)
            .map(|(_, boid)| boid)
    }
}

/// An autonomous point with a position and a velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Boid {
    /// World-space location.
    pub position: Vec3,
    /// World-space velocity in units per second.
    pub velocity: Vec3,
}

impl Boid {
    /// Creates a boid at `position` moving with `velocity`.
    #[must_use]
    pub const fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Advances the boid by one tick of `dt` seconds.
    ///
    /// The accumulated steering is added to the velocity as-is; only the
    /// position step is scaled by `dt`. Callers must pass `dt > 0`.
    pub fn update(&mut self, dt: f32, neighbours: Neighbours<'_>, world: &World<'_>) {
        let acceleration = self.acceleration(neighbours, world);
        self.velocity += acceleration;
        self.position += self.velocity * dt;
        self.wrap(world);

        if self.is_over_water(world) {
            // Step back and head the other way in the horizontal plane.
            self.position -= self.velocity * dt;
            self.velocity.x = -self.velocity.x;
            self.velocity.y = -self.velocity.y;
            self.position += self.velocity * dt;
            self.wrap(world);
            trace!(
                "boid turned back from water, now at {:?} moving {:?}",
                self.position,
                self.velocity
            );
        }
    }

    /// Sum of the active steering contributions for this tick.
    ///
    /// [`Boid::separate`] is deliberately not part of the sum.
    #[must_use]
    pub fn acceleration(&self, neighbours: Neighbours<'_>, world: &World<'_>) -> Vec3 {
        self.cruise()
            + self.avoid_terrain(world)
            + self.align(neighbours)
            + self.congregate(neighbours)
    }

    /// Steering towards [`DESIRED_SPEED`] along the current heading.
    ///
    /// A stationary boid is kicked along +Y.
    #[must_use]
    pub fn cruise(&self) -> Vec3 {
        let current_speed = self.velocity.length();
        if is_close_to_zero(current_speed) {
            Vec3::Y * DESIRED_SPEED
        } else {
            // Same as normalize(velocity) * DESIRED_SPEED - velocity.
            self.velocity * (DESIRED_SPEED / current_speed - 1.0)
        }
    }

    /// Vertical push keeping the boid [`DESIRED_HEIGHT`] above the ground and
    /// above the water surface.
    #[must_use]
    pub fn avoid_terrain(&self, world: &World<'_>) -> Vec3 {
        let height = self.position.z - world.terrain_height_at(self.position);

        if height < DESIRED_HEIGHT || self.position.z <= world.sea_level() {
            Vec3::Z * MAX_ACCELERATION
        } else if height > DESIRED_HEIGHT {
            Vec3::Z * -MAX_ACCELERATION
        } else {
            Vec3::ZERO
        }
    }

    /// Whether the boid is above a cell at or below the sea level.
    #[must_use]
    pub fn is_over_water(&self, world: &World<'_>) -> bool {
        world.is_over_water(self.position)
    }

    /// Repulsion from crowding neighbours.
    ///
    /// Always zero and never called by [`Boid::update`]; cohesion already
    /// turns into repulsion inside [`DESIRED_SEPARATION`].
    #[expect(
        clippy::unused_self,
        reason = "Kept with the same shape as the other steering rules."
    )]
    #[must_use]
    pub const fn separate(&self, _neighbours: Neighbours<'_>) -> Vec3 {
        Vec3::ZERO
    }

    /// Steering to match the closest neighbour's heading at cruise speed.
    #[must_use]
    pub fn align(&self, neighbours: Neighbours<'_>) -> Vec3 {
        self.find_closest(neighbours).map_or(Vec3::ZERO, |closest| {
            scale_to_length(closest.velocity, DESIRED_SPEED, Vec3::Y) - self.velocity
        })
    }

    /// Pull towards the closest neighbour, or push away once within
    /// [`DESIRED_SEPARATION`].
    #[must_use]
    pub fn congregate(&self, neighbours: Neighbours<'_>) -> Vec3 {
        let Some(closest) = self.find_closest(neighbours) else {
            return Vec3::ZERO;
        };

        let separation = closest.position - self.position;
        let distance = separation.length();

        if is_close_to_zero(distance) {
            Vec3::X * MAX_ACCELERATION
        } else if distance > DESIRED_SEPARATION {
            separation * (MAX_ACCELERATION / distance)
        } else {
            separation * (-MAX_ACCELERATION / distance)
        }
    }

    /// Closest candidate strictly within [`MAX_PERCEPTION_DISTANCE`].
    ///
    /// Ties keep the candidate scanned first.
    #[must_use]
    pub fn find_closest<'n>(&self, neighbours: Neighbours<'n>) -> Option<&'n Self> {
        let mut closest = None;
        let mut closest_distance = f32::MAX;

        for other in neighbours.iter() {
            let distance = (self.position - other.position).length();
            if distance < closest_distance && distance < MAX_PERCEPTION_DISTANCE {
                closest_distance = distance;
                closest = Some(other);
            }
        }

        closest
    }

    /// Brings the boid back inside the world after crossing an X or Y edge.
    pub fn wrap(&mut self, world: &World<'_>) {
        self.position = world.wrap(self.position);
    }
}
