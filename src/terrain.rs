//! Read-only terrain queries consumed by the simulation.
//!
//! The flock only ever asks two questions of the ground beneath it: how big
//! the height grid is and how high a given cell sits. [`Terrain`] captures
//! that contract; [`HeightField`] is the in-memory implementation used by the
//! driver and the tests.

use noise::{NoiseFn, Perlin};
use thiserror::Error;

use crate::numeric::{expect_f32, len_to_f32};

/// Spatial frequency of procedural heightfields, in cycles per cell.
const PERLIN_FREQUENCY: f64 = 1.0 / 32.0;

/// Smallest usable grid dimension. A single row or column has no extent to
/// wrap across.
pub const MIN_GRID_SIZE: usize = 2;

/// Integer cell coordinate in the terrain grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    /// Column index.
    pub x: usize,
    /// Row index.
    pub y: usize,
}

impl From<(usize, usize)> for GridCell {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Height grid queried by boids each tick.
///
/// Implementations are shared read-only for the duration of a tick.
pub trait Terrain {
    /// Number of grid samples along X.
    fn grid_size_x(&self) -> usize;

    /// Number of grid samples along Y.
    fn grid_size_y(&self) -> usize;

    /// Elevation of the cell at `(cell_x, cell_y)`.
    ///
    /// Callers pass indices inside `0..grid_size`; the simulation clamps
    /// positions into the grid before asking.
    fn height_at(&self, cell_x: usize, cell_y: usize) -> f32;
}

/// Errors raised while building a [`HeightField`].
#[derive(Debug, Error, PartialEq)]
pub enum TerrainError {
    /// One of the axes has fewer than [`MIN_GRID_SIZE`] samples.
    #[error(
        "terrain grid {size_x}x{size_y} is too small; each axis needs at least {min} samples",
        min = MIN_GRID_SIZE
    )]
    GridTooSmall {
        /// Requested X dimension.
        size_x: usize,
        /// Requested Y dimension.
        size_y: usize,
    },
    /// The sample buffer does not match the grid dimensions.
    #[error("expected {expected} height samples, got {actual}")]
    LengthMismatch {
        /// `size_x * size_y`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// A sample is NaN or infinite.
    #[error("height sample at ({x}, {y}) is not finite")]
    NonFiniteHeight {
        /// Column of the offending sample.
        x: usize,
        /// Row of the offending sample.
        y: usize,
    },
}

/// Row-major grid of terrain elevations.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    size_x: usize,
    size_y: usize,
    heights: Vec<f32>,
}

impl HeightField {
    /// Wraps a row-major buffer of `size_x * size_y` samples.
    ///
    /// # Errors
    /// Returns [`TerrainError`] when the grid is smaller than
    /// [`MIN_GRID_SIZE`] on either axis, the buffer length is wrong or a
    /// sample is not finite.
    pub fn new(size_x: usize, size_y: usize, heights: Vec<f32>) -> Result<Self, TerrainError> {
        if size_x < MIN_GRID_SIZE || size_y < MIN_GRID_SIZE {
            return Err(TerrainError::GridTooSmall { size_x, size_y });
        }
        let expected = size_x * size_y;
        if heights.len() != expected {
            return Err(TerrainError::LengthMismatch {
                expected,
                actual: heights.len(),
            });
        }
        if let Some(index) = heights.iter().position(|h| !h.is_finite()) {
            return Err(TerrainError::NonFiniteHeight {
                x: index % size_x,
                y: index / size_x,
            });
        }
        Ok(Self {
            size_x,
            size_y,
            heights,
        })
    }

    /// Builds a grid by sampling `height` at every cell.
    ///
    /// # Errors
    /// See [`HeightField::new`].
    pub fn from_fn<F>(size_x: usize, size_y: usize, mut height: F) -> Result<Self, TerrainError>
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut heights = Vec::with_capacity(size_x.saturating_mul(size_y));
        for y in 0..size_y {
            for x in 0..size_x {
                heights.push(height(x, y));
            }
        }
        Self::new(size_x, size_y, heights)
    }

    /// Builds a grid where every cell has the same elevation.
    ///
    /// # Errors
    /// See [`HeightField::new`].
    ///
    /// # Examples
    /// ```
    /// use flock::{HeightField, Terrain};
    /// let ground = HeightField::flat(5, 3, 2.0).unwrap();
    /// assert_eq!(ground.grid_size_x(), 5);
    /// assert_eq!(ground.height_at(4, 2), 2.0);
    /// ```
    pub fn flat(size_x: usize, size_y: usize, height: f32) -> Result<Self, TerrainError> {
        Self::from_fn(size_x, size_y, |_, _| height)
    }

    /// Builds rolling hills from Perlin noise, with elevations in
    /// `0.0..=z_scale`.
    ///
    /// The same `seed` always yields the same terrain.
    ///
    /// # Errors
    /// See [`HeightField::new`].
    pub fn perlin(
        size_x: usize,
        size_y: usize,
        seed: u32,
        z_scale: f32,
    ) -> Result<Self, TerrainError> {
        let perlin = Perlin::new(seed);
        Self::from_fn(size_x, size_y, |x, y| {
            let sample = perlin.get([
                f64::from(len_to_f32(x)) * PERLIN_FREQUENCY,
                f64::from(len_to_f32(y)) * PERLIN_FREQUENCY,
            ]);
            let unit = expect_f32(sample.mul_add(0.5, 0.5).clamp(0.0, 1.0));
            unit * z_scale
        })
    }

    /// Lowest sample in the grid.
    #[must_use]
    pub fn min_height(&self) -> f32 {
        self.heights.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Highest sample in the grid.
    #[must_use]
    pub fn max_height(&self) -> f32 {
        self.heights.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }
}

impl Terrain for HeightField {
    fn grid_size_x(&self) -> usize {
        self.size_x
    }

    fn grid_size_y(&self) -> usize {
        self.size_y
    }

    /// Out-of-range indices read the nearest edge sample.
    fn height_at(&self, cell_x: usize, cell_y: usize) -> f32 {
        let x = cell_x.min(self.size_x - 1);
        let y = cell_y.min(self.size_y - 1);
        self.heights
            .get(y * self.size_x + x)
            .copied()
            .unwrap_or_default()
    }
}
