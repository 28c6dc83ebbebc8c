//! Spawn context for particle initialization.
//!
//! Wraps the random source used when populating a field, so deterministic
//! tests can inject a fixed seed while normal runs draw from entropy.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::Particle;

/// Context handed to spawner functions, one call per particle.
///
/// The default spawner produces the stock field look: small translucent
/// dots scattered over the whole window with a slow random drift. Custom
/// spawners can use the random helpers or ignore them entirely:
///
/// ```ignore
/// Animator::new().with_spawner(|ctx| Particle {
///     position: ctx.random_position(),
///     radius: 1.5,
///     velocity: Vec2::ZERO,
///     alpha: 0.6,
/// })
/// ```
pub struct SpawnContext {
    /// Index of the particle being spawned (0 to count-1).
    pub index: u32,
    /// Total number of particles being spawned.
    pub count: u32,
    /// Field dimensions in pixels.
    pub bounds: Vec2,
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a spawn context covering `count` particles.
    ///
    /// `seed` of `None` draws the RNG state from OS entropy; `Some` gives a
    /// fully deterministic spawn sequence.
    pub(crate) fn new(count: u32, bounds: Vec2, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self {
            index: 0,
            count,
            bounds,
            rng,
        }
    }

    /// Normalized progress through the spawn (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        self.index as f32 / self.count as f32
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random position inside the field bounds.
    pub fn random_position(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(0.0..self.bounds.x),
            self.rng.gen_range(0.0..self.bounds.y),
        )
    }

    /// Random drift velocity, each axis in [-0.25, 0.25) pixels per frame.
    pub fn random_velocity(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(-0.25..0.25),
            self.rng.gen_range(-0.25..0.25),
        )
    }

    /// The stock particle: random position, radius in [1, 4), drift speed
    /// in [-0.25, 0.25) per axis, alpha in [0.3, 0.8).
    pub fn default_particle(&mut self) -> Particle {
        Particle {
            position: self.random_position(),
            radius: self.rng.gen_range(1.0..4.0),
            velocity: self.random_velocity(),
            alpha: self.rng.gen_range(0.3..0.8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_particle_ranges() {
        let bounds = Vec2::new(800.0, 600.0);
        let mut ctx = SpawnContext::new(200, bounds, Some(7));

        for i in 0..200 {
            ctx.index = i;
            let p = ctx.default_particle();

            assert!(p.position.x >= 0.0 && p.position.x < bounds.x);
            assert!(p.position.y >= 0.0 && p.position.y < bounds.y);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            assert!(p.velocity.x >= -0.25 && p.velocity.x < 0.25);
            assert!(p.velocity.y >= -0.25 && p.velocity.y < 0.25);
            assert!(p.alpha >= 0.3 && p.alpha < 0.8);
        }
    }

    #[test]
    fn test_seeded_spawn_is_deterministic() {
        let bounds = Vec2::new(640.0, 480.0);
        let mut a = SpawnContext::new(10, bounds, Some(42));
        let mut b = SpawnContext::new(10, bounds, Some(42));

        for _ in 0..10 {
            assert_eq!(a.default_particle(), b.default_particle());
        }
    }

    #[test]
    fn test_progress() {
        let mut ctx = SpawnContext::new(100, Vec2::new(100.0, 100.0), Some(0));
        ctx.index = 50;
        assert!((ctx.progress() - 0.5).abs() < 0.001);
    }
}
