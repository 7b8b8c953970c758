//! Debris geometry generation
//!
//! Outlines are irregular polygons with vertex radii jittered around half the
//! debris size; holes are crater decorations punched near the middle. Both
//! are rolled once at spawn and never change; rotation is applied by whoever
//! draws them.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

/// A crater decoration: offset from the debris center plus radius
#[derive(Debug, Clone, Copy)]
pub struct Hole {
    pub offset: Vec2,
    pub radius: f32,
}

/// Roll an 8-12 vertex outline with radii jittered +-20% around size/2
pub fn irregular_outline(rng: &mut Pcg32, size: f32) -> Vec<Vec2> {
    let vertices = rng.random_range(8u32..=12);
    (0..vertices)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / vertices as f32;
            let radius = size / 2.0 * rng.random_range(0.8..1.2);
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Roll 1-3 craters, all landing within the middle third of the outline
pub fn punch_holes(rng: &mut Pcg32, size: f32) -> Vec<Hole> {
    let count = rng.random_range(1u32..=3);
    (0..count)
        .map(|_| {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let distance = rng.random_range(0.0..size / 3.0);
            Hole {
                offset: Vec2::new(angle.cos(), angle.sin()) * distance,
                radius: rng.random_range(3.0..8.0),
            }
        })
        .collect()
}
