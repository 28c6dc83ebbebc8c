//! # Slow Drift
//!
//! A sparse, barely moving field built with a custom spawner: large faint
//! dots drifting at a tenth of the stock speed. Seeded, so every run looks
//! the same.
//!
//! Run with: `cargo run --example slow`

use driftfield::prelude::*;

fn main() {
    let result = Animator::new()
        .with_particle_count(40)
        .with_seed(1)
        .with_spawner(|ctx| Particle {
            position: ctx.random_position(),
            radius: ctx.random_range(3.0, 6.0),
            velocity: ctx.random_velocity() * 0.1,
            alpha: ctx.random_range(0.15, 0.4),
        })
        .with_title("driftfield - slow")
        .run();

    if let Err(e) = result {
        eprintln!("driftfield: {}", e);
        std::process::exit(1);
    }
}
