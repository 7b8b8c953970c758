//! Game state and entity types
//!
//! Everything the simulation mutates lives here. All randomness flows through
//! the seeded RNG carried by `GameState`, so any run is reproducible from its
//! seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

use super::shape::{self, Hole};
use super::spawn;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for confirm input
    StartScreen,
    /// Active gameplay
    Playing,
    /// Pause overlay
    Paused,
    /// Run ended by a rocket-debris collision
    GameOver,
}

/// Notable things that happened during a tick, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    RunStarted,
    DebrisShot { at: Vec2 },
    LevelUp { level: u32 },
    LauncherAdded { launchers: u32 },
    RunEnded { score: u32, level: u32 },
}

/// The player's rocket. Owns its bullets.
#[derive(Debug, Clone)]
pub struct Rocket {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal pixels per frame while a direction key is held
    pub speed: f32,
    /// Bullet-emission points; grows with difficulty upgrades
    pub launchers: u32,
    pub bullets: Vec<Bullet>,
}

impl Rocket {
    pub fn new() -> Self {
        Self {
            x: ARENA_WIDTH / 2.0 - ROCKET_WIDTH / 2.0,
            y: ARENA_HEIGHT - ROCKET_HEIGHT - ROCKET_BOTTOM_MARGIN,
            width: ROCKET_WIDTH,
            height: ROCKET_HEIGHT,
            speed: ROCKET_SPEED,
            launchers: 1,
            bullets: Vec::new(),
        }
    }

    /// Move one step left or right, clamped so the hull stays in the arena
    pub fn slide(&mut self, dx: f32) {
        self.x = (self.x + dx).clamp(0.0, ARENA_WIDTH - self.width);
    }

    /// Muzzle x positions, evenly spaced across the hull
    pub fn muzzle_xs(&self) -> impl Iterator<Item = f32> + '_ {
        let spacing = self.width / (self.launchers + 1) as f32;
        (1..=self.launchers).map(move |i| self.x + spacing * i as f32)
    }

    /// Fire one bullet from every launcher
    pub fn fire(&mut self) {
        let y = self.y + self.height * MUZZLE_HEIGHT_FRAC;
        let volley: Vec<Bullet> = self
            .muzzle_xs()
            .map(|x| Bullet::new(Vec2::new(x, y)))
            .collect();
        self.bullets.extend(volley);
    }

    /// Add a launcher and widen the hull; the hull saturates at the arena
    /// width and x re-clamps so it still fits
    pub fn upgrade(&mut self) {
        self.launchers += 1;
        self.width = (self.width + ROCKET_WIDEN_STEP).min(ARENA_WIDTH);
        self.x = self.x.clamp(0.0, ARENA_WIDTH - self.width);
    }
}

impl Default for Rocket {
    fn default() -> Self {
        Self::new()
    }
}

/// A bullet travelling straight up
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    /// Center
    pub pos: Vec2,
    pub speed: f32,
    pub radius: f32,
}

impl Bullet {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            speed: BULLET_SPEED,
            radius: BULLET_RADIUS,
        }
    }

    pub fn advance(&mut self) {
        self.pos.y -= self.speed;
    }

    /// True once the bullet has left the top of the arena
    pub fn off_screen(&self) -> bool {
        self.pos.y < 0.0
    }
}

/// A falling, rotating chunk of orbital junk
#[derive(Debug, Clone)]
pub struct Debris {
    /// Center of the outline
    pub pos: Vec2,
    /// Bounding diameter
    pub size: f32,
    /// Fall speed, fixed at creation: base roll times the difficulty
    /// multiplier in effect at spawn time
    pub speed: f32,
    /// Current rotation, degrees
    pub rotation: f32,
    /// Degrees per frame
    pub rotation_speed: f32,
    /// Irregular outline, offsets from center. Immutable after creation.
    pub outline: Vec<Vec2>,
    /// Crater decorations. Immutable after creation.
    pub holes: Vec<Hole>,
}

impl Debris {
    /// Roll a fresh debris sitting just above the arena top
    pub fn spawn(rng: &mut Pcg32, speed_multiplier: f32) -> Self {
        let size = rng.random_range(DEBRIS_SIZE_MIN..=DEBRIS_SIZE_MAX);
        let half = size / 2.0;
        Self {
            pos: Vec2::new(rng.random_range(half..=ARENA_WIDTH - half), -half),
            size,
            speed: rng.random_range(DEBRIS_BASE_SPEED_MIN..=DEBRIS_BASE_SPEED_MAX)
                * speed_multiplier,
            rotation: rng.random_range(0.0..360.0),
            rotation_speed: rng.random_range(-2.0..2.0),
            outline: shape::irregular_outline(rng, size),
            holes: shape::punch_holes(rng, size),
        }
    }

    pub fn advance(&mut self) {
        self.pos.y += self.speed;
        self.rotation += self.rotation_speed;
    }

    /// True once the whole outline has fallen past the arena bottom
    pub fn off_screen(&self) -> bool {
        self.pos.y - self.size / 2.0 > ARENA_HEIGHT
    }
}

/// Transient debris-destruction fragment. Visual only: never collides,
/// never scores.
#[derive(Debug, Clone)]
pub struct ScatterParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Shrinks a little every frame
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// 1.0 at birth, fades to 0; the renderer maps this to brightness
    pub life: f32,
}

impl ScatterParticle {
    pub fn burst(rng: &mut Pcg32, at: Vec2) -> Self {
        let angle = rng.random_range(0.0..std::f32::consts::TAU);
        let speed = rng.random_range(2.0..6.0);
        Self {
            pos: at,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            size: rng.random_range(4.0..8.0),
            rotation: rng.random_range(0.0..360.0),
            rotation_speed: rng.random_range(-10.0..10.0),
            life: 1.0,
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.vel.y += 0.1; // fragments arc downward
        self.rotation += self.rotation_speed;
        self.life -= 0.015;
        self.size *= 0.99;
    }

    pub fn alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Background star with a brightness ping-pong twinkle
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    /// Oscillates between 0.3 and 1.0
    pub brightness: f32,
    twinkle_speed: f32,
    twinkle_direction: f32,
}

impl Star {
    pub fn scatter(rng: &mut Pcg32) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..ARENA_WIDTH),
                rng.random_range(0.0..ARENA_HEIGHT),
            ),
            size: rng.random_range(1.0..3.0),
            brightness: rng.random_range(0.3..1.0),
            twinkle_speed: rng.random_range(0.02..0.05),
            twinkle_direction: 1.0,
        }
    }

    pub fn advance(&mut self) {
        self.brightness += self.twinkle_speed * self.twinkle_direction;
        if self.brightness >= 1.0 {
            self.brightness = 1.0;
            self.twinkle_direction = -1.0;
        } else if self.brightness <= 0.3 {
            self.brightness = 0.3;
            self.twinkle_direction = 1.0;
        }
    }
}

/// Complete game state, owned by the loop and handed to each subsystem
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Monotonic; +10 per destroyed debris
    pub score: u32,
    /// Monotonic, starts at 1
    pub difficulty_level: u32,
    /// Starts at 1.0, +0.2 per level
    pub speed_multiplier: f32,
    /// Frames between timer spawns, floor-clamped as difficulty rises
    pub spawn_interval: u32,
    pub spawn_timer: u32,
    pub elapsed_frames: u64,
    pub rocket: Rocket,
    pub debris: Vec<Debris>,
    pub particles: Vec<ScatterParticle>,
    pub stars: Vec<Star>,
    /// Run seed, kept for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Build a state sitting on the start screen
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT).map(|_| Star::scatter(&mut rng)).collect();
        let mut state = Self {
            phase: GamePhase::StartScreen,
            score: 0,
            difficulty_level: 1,
            speed_multiplier: 1.0,
            spawn_interval: tuning.spawn_interval_base,
            spawn_timer: 0,
            elapsed_frames: 0,
            rocket: Rocket::new(),
            debris: Vec::new(),
            particles: Vec::new(),
            stars,
            seed,
            rng,
        };
        spawn::seed_initial_field(&mut state, tuning);
        state
    }

    /// Reinitialize every run-scoped value: fresh rocket, empty lists,
    /// score 0, level 1, multiplier 1.0, fresh debris field. Stars and the
    /// RNG stream carry over.
    pub fn reset_run(&mut self, tuning: &Tuning) {
        self.score = 0;
        self.difficulty_level = 1;
        self.speed_multiplier = 1.0;
        self.spawn_interval = tuning.spawn_interval_base;
        self.spawn_timer = 0;
        self.elapsed_frames = 0;
        self.rocket = Rocket::new();
        self.debris.clear();
        self.particles.clear();
        spawn::seed_initial_field(self, tuning);
    }
}
