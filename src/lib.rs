//! Terrain-aware flocking simulation.
//!
//! A [`Flock`] of [`Boid`]s cruises over a heightfield, keeps clear of the
//! ground and the water surface, and reacts to each boid's single closest
//! neighbour. Rendering, input and terrain loading live outside this crate;
//! the simulation only reads terrain heights through the [`Terrain`] trait.
pub mod boid;
pub mod config;
pub mod constants;
pub mod flock;
pub mod logging;
pub mod numeric;
pub mod spawn;
pub mod terrain;
pub mod vector_math;
pub mod world;
pub use constants::*;

// Re-export commonly used items
pub use boid::{Boid, Neighbours};
pub use config::{ConfigError, SimulationConfig};
pub use flock::{Flock, NeighbourPolicy};
pub use logging::init as init_logging;
pub use spawn::{seeded_flock, spawn_flock, SpawnConfig};
pub use terrain::{GridCell, HeightField, Terrain, TerrainError};
pub use world::{World, WorldError};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use flock::prelude::*;
    //! ```

    pub use crate::Boid;
    pub use crate::Flock;
    pub use crate::HeightField;
    pub use crate::NeighbourPolicy;
    pub use crate::Terrain;
    pub use crate::World;
    pub use glam::Vec3;
}
