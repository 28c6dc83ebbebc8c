//! The particle entity and its GPU instance form.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// One drifting dot in the field.
///
/// Position is in window pixel space, origin at the top-left. Velocity is a
/// constant per-frame displacement; the field only ever flips the sign of a
/// component when the particle crosses a window edge. Radius and alpha are
/// fixed at spawn time and never change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Current location in pixels.
    pub position: Vec2,
    /// Draw size in pixels.
    pub radius: f32,
    /// Per-frame displacement in pixels.
    pub velocity: Vec2,
    /// Draw opacity, 0.0 to 1.0.
    pub alpha: f32,
}

impl Particle {
    /// Snapshot this particle into its vertex-buffer form.
    #[inline]
    pub fn instance(&self) -> ParticleInstance {
        ParticleInstance {
            position: self.position.to_array(),
            radius: self.radius,
            alpha: self.alpha,
        }
    }
}

/// Per-instance vertex data: one entry per visible particle per frame.
///
/// The layout must match the instance attributes declared in the render
/// shader (position at location 0, radius at 1, alpha at 2).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2],
    pub radius: f32,
    pub alpha: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_snapshot() {
        let p = Particle {
            position: Vec2::new(12.5, 40.0),
            radius: 2.0,
            velocity: Vec2::new(-0.1, 0.2),
            alpha: 0.5,
        };

        let inst = p.instance();
        assert_eq!(inst.position, [12.5, 40.0]);
        assert_eq!(inst.radius, 2.0);
        assert_eq!(inst.alpha, 0.5);
    }

    #[test]
    fn test_instance_layout() {
        // 2 floats position + radius + alpha, tightly packed.
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 16);
    }
}
