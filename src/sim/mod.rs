//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Fixed timestep only (one tick = one 60 Hz frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod progression;
pub mod shape;
pub mod spawn;
pub mod state;
pub mod tick;

pub use shape::Hole;
pub use state::{
    Bullet, Debris, GameEvent, GamePhase, GameState, Rocket, ScatterParticle, Star,
};
pub use tick::{TickInput, tick};
