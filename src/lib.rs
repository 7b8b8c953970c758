//! Debris Rain - a rocket-vs-falling-debris arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, difficulty, game state)
//! - `render`: Terminal presentation layer (reads sim data, queues cells)
//! - `tuning`: Data-driven difficulty balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate: one tick is exactly one 60 Hz frame
    pub const TICK_HZ: u32 = 60;

    /// Arena dimensions (sim space, pixels; +y points down)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Rocket defaults
    pub const ROCKET_WIDTH: f32 = 40.0;
    pub const ROCKET_HEIGHT: f32 = 100.0;
    pub const ROCKET_SPEED: f32 = 5.0;
    /// Gap between the rocket base and the arena bottom
    pub const ROCKET_BOTTOM_MARGIN: f32 = 20.0;
    /// Hull widening per launcher upgrade
    pub const ROCKET_WIDEN_STEP: f32 = 20.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 7.0;
    pub const BULLET_RADIUS: f32 = 3.0;
    /// Bullets leave the hull at this fraction of its height
    pub const MUZZLE_HEIGHT_FRAC: f32 = 0.7;

    /// Debris size and base fall-speed ranges; the actual speed is the base
    /// roll times the current difficulty multiplier
    pub const DEBRIS_SIZE_MIN: f32 = 25.0;
    pub const DEBRIS_SIZE_MAX: f32 = 40.0;
    pub const DEBRIS_BASE_SPEED_MIN: f32 = 2.0;
    pub const DEBRIS_BASE_SPEED_MAX: f32 = 5.0;

    /// Points per destroyed debris
    pub const SCORE_PER_DEBRIS: u32 = 10;

    /// Scatter particles emitted per destroyed debris
    pub const SCATTER_BURST: usize = 40;
    /// Background stars per run
    pub const STAR_COUNT: usize = 200;
}

/// Rotate an offset vector by an angle given in degrees
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
