//! The owned collection of boids updated together each tick.
//!
//! Updates are sequential and in place: boid `i` is advanced against a flock
//! in which boids `0..i` have already moved this tick. There is no
//! double-buffering, so results depend on index order.

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::boid::{Boid, Neighbours};
use crate::numeric::len_to_f32;
use crate::world::World;

/// Whether a boid may pick itself as its closest neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighbourPolicy {
    /// A boid never sees itself. Alignment and cohesion react to the closest
    /// other boid.
    #[default]
    ExcludeSelf,
    /// A boid scans the whole flock, itself included. Its own zero distance
    /// always wins, so alignment degenerates into cruising and cohesion into
    /// a constant +X nudge.
    IncludeSelf,
}

/// Ordered, fixed-size set of boids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flock {
    boids: Vec<Boid>,
    policy: NeighbourPolicy,
}

impl Flock {
    /// Takes ownership of `boids` using [`NeighbourPolicy::ExcludeSelf`].
    #[must_use]
    pub const fn new(boids: Vec<Boid>) -> Self {
        Self {
            boids,
            policy: NeighbourPolicy::ExcludeSelf,
        }
    }

    /// Replaces the neighbour policy.
    #[must_use]
    pub fn with_policy(mut self, policy: NeighbourPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active neighbour policy.
    #[must_use]
    pub const fn policy(&self) -> NeighbourPolicy {
        self.policy
    }

    /// Advances every boid by `dt` seconds, in index order.
    ///
    /// # Examples
    /// ```
    /// use flock::{Boid, Flock, HeightField, World};
    /// use glam::Vec3;
    ///
    /// let ground = HeightField::flat(65, 65, 0.0).unwrap();
    /// let world = World::new(&ground, 1.0, -100.0).unwrap();
    /// let mut flock = Flock::new(vec![Boid::new(Vec3::ZERO, Vec3::ZERO)]);
    /// flock.update(1.0, &world);
    /// assert_eq!(flock.boids()[0].velocity, Vec3::new(0.0, 10.0, 5.0));
    /// ```
    pub fn update(&mut self, dt: f32, world: &World<'_>) {
        debug!("updating {} boids with dt {dt}", self.boids.len());

        for index in 0..self.boids.len() {
            let Some(mut boid) = self.boids.get(index).copied() else {
                continue;
            };
            let neighbours = match self.policy {
                NeighbourPolicy::ExcludeSelf => Neighbours::excluding(&self.boids, index),
                NeighbourPolicy::IncludeSelf => Neighbours::including_self(&self.boids),
            };
            boid.update(dt, neighbours, world);
            if let Some(slot) = self.boids.get_mut(index) {
                *slot = boid;
            }
        }
    }

    /// All boids in update order.
    #[must_use]
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    /// Mutable access to the boids. The flock size cannot change.
    pub fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    /// Number of boids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boids.len()
    }

    /// Whether the flock has no boids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Iterates over the boids in update order.
    pub fn iter(&self) -> std::slice::Iter<'_, Boid> {
        self.boids.iter()
    }

    /// Current positions, for drawing.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.boids.iter().map(|boid| boid.position)
    }

    /// Mean position of the flock, or `None` when it is empty.
    #[must_use]
    pub fn centroid(&self) -> Option<Vec3> {
        if self.boids.is_empty() {
            return None;
        }
        let sum: Vec3 = self.positions().sum();
        Some(sum / len_to_f32(self.boids.len()))
    }
}

impl From<Vec<Boid>> for Flock {
    fn from(boids: Vec<Boid>) -> Self {
        Self::new(boids)
    }
}

impl FromIterator<Boid> for Flock {
    fn from_iter<I: IntoIterator<Item = Boid>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Flock {
    type Item = &'a Boid;
    type IntoIter = std::slice::Iter<'a, Boid>;

    fn into_iter(self) -> Self::IntoIter {
        self.boids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeightField;

    fn pair() -> [Boid; 2] {
        [
            Boid::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO),
            Boid::new(Vec3::new(0.0, 3.0, 5.0), Vec3::ZERO),
        ]
    }

    #[test]
    fn later_boids_see_earlier_updates() {
        let ground = HeightField::flat(65, 65, 0.0).unwrap();
        let world = World::new(&ground, 1.0, -100.0).unwrap();
        let dt = 0.1;
        let start = pair();

        let mut flock = Flock::new(start.to_vec());
        flock.update(dt, &world);

        let mut first = start[0];
        first.update(dt, Neighbours::excluding(&start, 0), &world);
        let sequential = [first, start[1]];
        let mut second = start[1];
        second.update(dt, Neighbours::excluding(&sequential, 1), &world);

        let mut buffered = start[1];
        buffered.update(dt, Neighbours::excluding(&start, 1), &world);

        assert_eq!(flock.boids(), &[first, second]);
        assert_ne!(second, buffered);
    }

    #[test]
    fn legacy_policy_lets_boids_see_themselves() {
        let ground = HeightField::flat(65, 65, 0.0).unwrap();
        let world = World::new(&ground, 1.0, -100.0).unwrap();
        let mut flock = Flock::new(vec![Boid::new(Vec3::ZERO, Vec3::ZERO)])
            .with_policy(NeighbourPolicy::IncludeSelf);
        flock.update(1.0, &world);
        // cruise (0,10,0) + climb (0,0,5) + self-align (0,10,0) + self-cohesion (5,0,0)
        assert_eq!(flock.boids()[0].velocity, Vec3::new(5.0, 20.0, 5.0));
    }

    #[test]
    fn centroid_averages_positions() {
        let flock: Flock = pair().into_iter().collect();
        assert_eq!(flock.centroid(), Some(Vec3::new(0.0, 1.5, 5.0)));
        assert_eq!(Flock::default().centroid(), None);
    }
}
