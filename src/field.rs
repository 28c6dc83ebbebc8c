//! The particle field: the simulation core.
//!
//! A [`ParticleField`] owns a fixed set of particles and advances them one
//! frame at a time. Each [`step`](ParticleField::step) runs, per particle
//! in storage order:
//!
//! 1. If a pointer is set and the particle is within the attraction radius,
//!    pull it toward the pointer by a fixed fraction of the delta vector.
//! 2. Snapshot the particle into this frame's instance list (the position
//!    it is drawn at).
//! 3. Advance the position by the particle's per-frame velocity.
//! 4. Reflect the velocity component whose axis left the bounds.
//!
//! Storage order is paint order: later particles draw over earlier ones.
//! The loop is pull-driven - whoever owns the field decides when (and
//! whether) the next frame happens, so halting is just not calling `step`.

use glam::Vec2;

use crate::particle::{Particle, ParticleInstance};
use crate::spawn::SpawnContext;

/// Number of particles in the stock field.
pub const DEFAULT_PARTICLE_COUNT: u32 = 80;

/// Distance from the pointer within which particles are attracted, in pixels.
pub const DEFAULT_ATTRACT_RADIUS: f32 = 150.0;

/// Fraction of the pointer delta applied per frame while attracted.
pub const DEFAULT_ATTRACT_PULL: f32 = 0.002;

/// A fixed-size field of drifting particles.
///
/// The particle set is created once and lives as long as the field; no
/// particles are added or removed afterwards. Only positions (every frame)
/// and velocity signs (on edge bounce) mutate.
pub struct ParticleField {
    particles: Vec<Particle>,
    instances: Vec<ParticleInstance>,
    bounds: Vec2,
    pointer: Option<Vec2>,
    attract_radius: f32,
    attract_pull: f32,
}

impl ParticleField {
    /// Create the stock field: [`DEFAULT_PARTICLE_COUNT`] particles with the
    /// default attribute distributions, seeded from entropy.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_seed(width, height, None)
    }

    /// Create the stock field with an explicit RNG seed (`None` = entropy).
    pub fn with_seed(width: f32, height: f32, seed: Option<u64>) -> Self {
        let bounds = Vec2::new(width, height);
        let mut ctx = SpawnContext::new(DEFAULT_PARTICLE_COUNT, bounds, seed);
        let particles = (0..DEFAULT_PARTICLE_COUNT)
            .map(|i| {
                ctx.index = i;
                ctx.default_particle()
            })
            .collect();

        Self::from_particles(width, height, particles)
    }

    /// Create a field from pre-built particles.
    pub fn from_particles(width: f32, height: f32, particles: Vec<Particle>) -> Self {
        let instances = Vec::with_capacity(particles.len());

        Self {
            particles,
            instances,
            bounds: Vec2::new(width, height),
            pointer: None,
            attract_radius: DEFAULT_ATTRACT_RADIUS,
            attract_pull: DEFAULT_ATTRACT_PULL,
        }
    }

    /// Override the attraction radius (pixels) and per-frame pull fraction.
    pub fn set_attraction(&mut self, radius: f32, pull: f32) {
        self.attract_radius = radius;
        self.attract_pull = pull;
    }

    /// Record the pointer position, in pixels.
    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = Some(position);
    }

    /// Forget the pointer; particles drift on velocity alone.
    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    /// Last recorded pointer position, if any.
    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Update the field bounds after a window resize.
    ///
    /// Particle positions are stored independently of any pixel buffer, so
    /// nothing else changes. Positions are never clamped: a particle left
    /// more than one velocity step outside the new bounds has its velocity
    /// sign flipped on every step and oscillates in place until a later
    /// resize grows the bounds past it. Resizing to the same dimensions is
    /// a no-op.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    /// Field dimensions in pixels.
    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// The particles, in storage (= paint) order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles in the field.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance the field by one frame and rebuild the instance snapshot.
    pub fn step(&mut self) {
        self.instances.clear();

        for p in &mut self.particles {
            if let Some(pointer) = self.pointer {
                let delta = pointer - p.position;
                if delta.length() < self.attract_radius {
                    p.position += delta * self.attract_pull;
                }
            }

            // Drawn here: after attraction, before the velocity advance.
            self.instances.push(p.instance());

            p.position += p.velocity;

            if p.position.x < 0.0 || p.position.x > self.bounds.x {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y < 0.0 || p.position.y > self.bounds.y {
                p.velocity.y = -p.velocity.y;
            }
        }
    }

    /// The instance snapshot produced by the most recent [`step`](Self::step).
    ///
    /// Empty until the first step.
    #[inline]
    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instances
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn single(position: Vec2, velocity: Vec2) -> ParticleField {
        let p = Particle {
            position,
            radius: 2.0,
            velocity,
            alpha: 0.5,
        };
        ParticleField::from_particles(800.0, 600.0, vec![p])
    }

    #[test]
    fn test_drift_without_pointer() {
        // 800x600, particle at (10, 300) drifting left at 0.2/frame.
        let mut field = single(Vec2::new(10.0, 300.0), Vec2::new(-0.2, 0.0));
        field.step();

        let p = field.particles()[0];
        assert!((p.position.x - 9.8).abs() < EPS);
        assert!((p.position.y - 300.0).abs() < EPS);
        assert!((p.velocity.x - (-0.2)).abs() < EPS);
    }

    #[test]
    fn test_edge_bounce_flips_speed_sign() {
        // Crossing the left edge leaves the position outside for one frame
        // but flips the velocity sign before the next.
        let mut field = single(Vec2::new(0.1, 300.0), Vec2::new(-0.2, 0.0));
        field.step();

        let p = field.particles()[0];
        assert!(p.position.x < 0.0);
        assert!((p.velocity.x - 0.2).abs() < EPS);

        // The following frame carries it back inside; no second flip.
        field.step();
        let p = field.particles()[0];
        assert!(p.position.x > 0.0);
        assert!((p.velocity.x - 0.2).abs() < EPS);
    }

    #[test]
    fn test_bottom_edge_bounce() {
        let mut field = single(Vec2::new(400.0, 599.9), Vec2::new(0.0, 0.2));
        field.step();

        let p = field.particles()[0];
        assert!(p.position.y > 600.0);
        assert!((p.velocity.y - (-0.2)).abs() < EPS);
    }

    #[test]
    fn test_attraction_displacement() {
        // Pointer at (100, 100), particle at (100, 140): distance 40 < 150,
        // so the pull is 0.2% of the delta vector, (0, -0.08).
        let mut field = single(Vec2::new(100.0, 140.0), Vec2::ZERO);
        field.set_pointer(Vec2::new(100.0, 100.0));
        field.step();

        let p = field.particles()[0];
        assert!((p.position.x - 100.0).abs() < EPS);
        assert!((p.position.y - 139.92).abs() < EPS);
    }

    #[test]
    fn test_attraction_applies_before_draw_and_velocity() {
        let mut field = single(Vec2::new(100.0, 140.0), Vec2::new(1.0, 0.0));
        field.set_pointer(Vec2::new(100.0, 100.0));
        field.step();

        // The instance snapshot sees the attracted position, not the
        // velocity-advanced one.
        let inst = field.instances()[0];
        assert!((inst.position[0] - 100.0).abs() < EPS);
        assert!((inst.position[1] - 139.92).abs() < EPS);

        let p = field.particles()[0];
        assert!((p.position.x - 101.0).abs() < EPS);
        assert!((p.position.y - 139.92).abs() < EPS);
    }

    #[test]
    fn test_no_attraction_at_or_beyond_radius() {
        // Exactly 150 pixels away: outside the strict threshold.
        let mut field = single(Vec2::new(150.0, 0.0), Vec2::ZERO);
        field.set_pointer(Vec2::ZERO);
        field.step();

        let p = field.particles()[0];
        assert!((p.position.x - 150.0).abs() < EPS);
        assert!((p.position.y - 0.0).abs() < EPS);
    }

    #[test]
    fn test_no_pointer_means_velocity_only() {
        let mut field = single(Vec2::new(200.0, 200.0), Vec2::new(0.1, -0.05));
        field.step();

        let p = field.particles()[0];
        assert!((p.position.x - 200.1).abs() < EPS);
        assert!((p.position.y - 199.95).abs() < EPS);
    }

    #[test]
    fn test_cleared_pointer_stops_attraction() {
        let mut field = single(Vec2::new(100.0, 140.0), Vec2::ZERO);
        field.set_pointer(Vec2::new(100.0, 100.0));
        field.clear_pointer();
        field.step();

        let p = field.particles()[0];
        assert!((p.position.y - 140.0).abs() < EPS);
    }

    #[test]
    fn test_immutable_attributes() {
        let mut field = ParticleField::with_seed(400.0, 300.0, Some(11));
        let before: Vec<_> = field
            .particles()
            .iter()
            .map(|p| (p.radius, p.alpha, p.velocity.x.abs(), p.velocity.y.abs()))
            .collect();

        field.set_pointer(Vec2::new(200.0, 150.0));
        for _ in 0..500 {
            field.step();
        }

        for (p, (radius, alpha, sx, sy)) in field.particles().iter().zip(before) {
            assert_eq!(p.radius, radius);
            assert_eq!(p.alpha, alpha);
            assert!((p.velocity.x.abs() - sx).abs() < EPS);
            assert!((p.velocity.y.abs() - sy).abs() < EPS);
        }
    }

    #[test]
    fn test_fixed_particle_count() {
        let mut field = ParticleField::with_seed(800.0, 600.0, Some(3));
        assert_eq!(field.len(), DEFAULT_PARTICLE_COUNT as usize);

        for _ in 0..100 {
            field.step();
        }
        assert_eq!(field.len(), DEFAULT_PARTICLE_COUNT as usize);
        assert_eq!(field.instances().len(), DEFAULT_PARTICLE_COUNT as usize);
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut field = ParticleField::with_seed(800.0, 600.0, Some(5));
        field.step();
        let positions: Vec<_> = field.particles().iter().map(|p| p.position).collect();

        field.resize(800.0, 600.0);
        field.resize(800.0, 600.0);

        assert_eq!(field.bounds(), Vec2::new(800.0, 600.0));
        for (p, pos) in field.particles().iter().zip(positions) {
            assert_eq!(p.position, pos);
        }
    }

    #[test]
    fn test_custom_attraction_knobs() {
        let mut field = single(Vec2::new(100.0, 140.0), Vec2::ZERO);
        field.set_attraction(30.0, 0.002);
        field.set_pointer(Vec2::new(100.0, 100.0));
        field.step();

        // Distance 40 is outside the shrunk radius; no pull.
        let p = field.particles()[0];
        assert!((p.position.y - 140.0).abs() < EPS);
    }
}
