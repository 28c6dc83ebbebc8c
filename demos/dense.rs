//! # Dense Field
//!
//! A heavier field than the stock 80 dots, with a wider attraction radius
//! so the cursor visibly gathers a cloud around itself.
//!
//! Run with: `cargo run --example dense`

use driftfield::Animator;

fn main() {
    if let Err(e) = Animator::new()
        .with_particle_count(400)
        .with_attract_radius(250.0)
        .with_title("driftfield - dense")
        .run()
    {
        eprintln!("driftfield: {}", e);
        std::process::exit(1);
    }
}
