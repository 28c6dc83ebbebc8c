//! # driftfield
//!
//! A pointer-reactive drifting particle field: a fixed set of translucent
//! white dots wanders across a window at a constant per-frame velocity,
//! leans toward the cursor while within a 150-pixel radius, and bounces
//! off the window edges. Decorative by intent; the simulation is CPU-side
//! and the renderer draws every dot as an instanced circle quad via wgpu.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::Animator;
//!
//! fn main() -> Result<(), driftfield::AnimatorError> {
//!     Animator::new().run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The field
//!
//! [`ParticleField`] owns the particle set and advances it one frame per
//! [`step`](ParticleField::step): pointer attraction, draw snapshot,
//! velocity advance, edge bounce - in that order, per particle. The field
//! is pull-driven and windowless on its own, which is what makes the
//! update rules directly testable.
//!
//! ### The animator
//!
//! [`Animator`] is the builder that wires a field to a winit window and a
//! wgpu surface:
//!
//! ```ignore
//! Animator::new()
//!     .with_particle_count(120)
//!     .with_seed(7)
//!     .with_title("snow, sort of")
//!     .run()?;
//! ```
//!
//! Escape closes the window; Space pauses the field (the last frame stays
//! on screen).
//!
//! ### Spawning
//!
//! Particle attributes come from a [`SpawnContext`] whose RNG is seedable,
//! so deterministic fields are a `with_seed` away. A custom spawner closure
//! replaces the stock distributions entirely.

mod animator;
mod error;
pub mod field;
mod gpu;
pub mod input;
mod particle;
pub mod spawn;
pub mod time;

pub use animator::Animator;
pub use error::{AnimatorError, GpuError};
pub use field::{
    ParticleField, DEFAULT_ATTRACT_PULL, DEFAULT_ATTRACT_RADIUS, DEFAULT_PARTICLE_COUNT,
};
pub use glam::Vec2;
pub use input::Input;
pub use particle::{Particle, ParticleInstance};
pub use spawn::SpawnContext;
pub use time::Time;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animator::Animator;
    pub use crate::error::{AnimatorError, GpuError};
    pub use crate::field::ParticleField;
    pub use crate::particle::{Particle, ParticleInstance};
    pub use crate::spawn::SpawnContext;
    pub use crate::time::Time;
    pub use crate::Vec2;
}
