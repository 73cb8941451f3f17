//! Per-tick world context handed to the flock.
//!
//! [`World`] bundles the terrain, the horizontal grid-to-world scale and the
//! sea level. It maps world positions onto terrain cells and implements the
//! toroidal wrap in X and Y.

use std::fmt;

use glam::Vec3;
use thiserror::Error;

use crate::numeric::{len_to_f32, truncate_to_index};
use crate::terrain::{GridCell, Terrain, MIN_GRID_SIZE};

/// Errors raised when assembling a [`World`].
#[derive(Debug, Error, PartialEq)]
pub enum WorldError {
    /// The horizontal scale is zero, negative or not finite.
    #[error("xy scale must be positive and finite, got {0}")]
    InvalidScale(f32),
    /// The sea level is NaN or infinite.
    #[error("sea level must be finite, got {0}")]
    InvalidSeaLevel(f32),
    /// The terrain grid has no extent to wrap across.
    #[error(
        "terrain grid {size_x}x{size_y} is too small; each axis needs at least {min} samples",
        min = MIN_GRID_SIZE
    )]
    GridTooSmall {
        /// Terrain X dimension.
        size_x: usize,
        /// Terrain Y dimension.
        size_y: usize,
    },
}

/// Read-only terrain context for one tick of the simulation.
#[derive(Clone, Copy)]
pub struct World<'a> {
    terrain: &'a dyn Terrain,
    xy_scale: f32,
    sea_level: f32,
}

impl fmt::Debug for World<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("grid_size_x", &self.terrain.grid_size_x())
            .field("grid_size_y", &self.terrain.grid_size_y())
            .field("xy_scale", &self.xy_scale)
            .field("sea_level", &self.sea_level)
            .finish()
    }
}

impl<'a> World<'a> {
    /// Creates a world over `terrain`.
    ///
    /// # Errors
    /// Returns [`WorldError`] when `xy_scale` is not a positive finite number,
    /// `sea_level` is not finite, or either terrain axis has fewer than
    /// [`MIN_GRID_SIZE`] samples.
    ///
    /// # Examples
    /// ```
    /// use flock::{HeightField, World};
    /// let ground = HeightField::flat(65, 65, 0.0).unwrap();
    /// let world = World::new(&ground, 1.0, -100.0).unwrap();
    /// assert_eq!(world.extent_x(), 64.0);
    /// ```
    pub fn new(
        terrain: &'a dyn Terrain,
        xy_scale: f32,
        sea_level: f32,
    ) -> Result<Self, WorldError> {
        if !(xy_scale.is_finite() && xy_scale > 0.0) {
            return Err(WorldError::InvalidScale(xy_scale));
        }
        if !sea_level.is_finite() {
            return Err(WorldError::InvalidSeaLevel(sea_level));
        }
        let size_x = terrain.grid_size_x();
        let size_y = terrain.grid_size_y();
        if size_x < MIN_GRID_SIZE || size_y < MIN_GRID_SIZE {
            return Err(WorldError::GridTooSmall { size_x, size_y });
        }
        Ok(Self {
            terrain,
            xy_scale,
            sea_level,
        })
    }

    /// Returns a copy of this world with a different sea level.
    ///
    /// # Errors
    /// Returns [`WorldError::InvalidSeaLevel`] when `sea_level` is not finite.
    pub fn with_sea_level(self, sea_level: f32) -> Result<Self, WorldError> {
        if !sea_level.is_finite() {
            return Err(WorldError::InvalidSeaLevel(sea_level));
        }
        Ok(Self { sea_level, ..self })
    }

    /// The terrain being flown over.
    #[must_use]
    pub fn terrain(&self) -> &'a dyn Terrain {
        self.terrain
    }

    /// World units per terrain cell.
    #[must_use]
    pub const fn xy_scale(&self) -> f32 {
        self.xy_scale
    }

    /// Height of the water surface.
    #[must_use]
    pub const fn sea_level(&self) -> f32 {
        self.sea_level
    }

    /// Full world width along X.
    #[must_use]
    pub fn extent_x(&self) -> f32 {
        (len_to_f32(self.terrain.grid_size_x()) - 1.0) * self.xy_scale
    }

    /// Full world depth along Y.
    #[must_use]
    pub fn extent_y(&self) -> f32 {
        (len_to_f32(self.terrain.grid_size_y()) - 1.0) * self.xy_scale
    }

    /// Re-enters `position` from the opposite edge when it has left the world
    /// in X or Y. Z is unbounded.
    ///
    /// A single extent is added or subtracted per axis, so positions already
    /// inside the world are returned unchanged.
    #[must_use]
    pub fn wrap(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            wrap_axis(position.x, self.extent_x()),
            wrap_axis(position.y, self.extent_y()),
            position.z,
        )
    }

    /// Terrain cell beneath `position`.
    ///
    /// The world is centred on the middle of the grid. Coordinates are
    /// rounded half-up (add one half, truncate toward zero) and then clamped
    /// into the grid, so positions outside the terrain read its edge.
    #[must_use]
    pub fn cell_at(&self, position: Vec3) -> GridCell {
        let size_x = self.terrain.grid_size_x();
        let size_y = self.terrain.grid_size_y();
        GridCell {
            x: truncate_to_index(self.grid_coordinate(position.x, size_x), size_x),
            y: truncate_to_index(self.grid_coordinate(position.y, size_y), size_y),
        }
    }

    /// Terrain elevation beneath `position`.
    #[must_use]
    pub fn terrain_height_at(&self, position: Vec3) -> f32 {
        let cell = self.cell_at(position);
        self.terrain.height_at(cell.x, cell.y)
    }

    /// Whether the terrain beneath `position` is at or below the sea level.
    #[must_use]
    pub fn is_over_water(&self, position: Vec3) -> bool {
        let depth = self.sea_level - self.terrain_height_at(position);
        depth >= 0.0
    }

    fn grid_coordinate(&self, world: f32, len: usize) -> f32 {
        world / self.xy_scale + (len_to_f32(len) - 1.0) * 0.5 + 0.5
    }
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    let half = extent * 0.5;
    if value < -half {
        value + extent
    } else if value > half {
        value - extent
    } else {
        value
    }
}
