//! Fixed timestep simulation tick
//!
//! One call advances the game exactly one frame. Menus are phases handled
//! here too, so a headless caller can drive the whole machine without a
//! terminal attached.

use crate::consts::*;
use crate::tuning::Tuning;

use super::collision;
use super::progression;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState, ScatterParticle};

/// Input commands for a single tick. `left`/`right` reflect held keys; the
/// rest are edge-triggered. Quit never reaches the sim - the front end owns
/// process exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub pause: bool,
    pub confirm: bool,
    pub restart: bool,
}

/// Advance the game state by one frame, returning whatever happened that the
/// presentation layer may care about.
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase {
        GamePhase::StartScreen => {
            if input.confirm {
                state.phase = GamePhase::Playing;
                events.push(GameEvent::RunStarted);
            }
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
            } else if input.restart {
                state.reset_run(tuning);
                state.phase = GamePhase::StartScreen;
            }
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset_run(tuning);
                state.phase = GamePhase::StartScreen;
            }
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
            } else if input.restart {
                state.reset_run(tuning);
                state.phase = GamePhase::StartScreen;
            } else {
                playing_frame(state, input, tuning, &mut events);
            }
        }
    }

    events
}

/// One frame of active gameplay, in fixed order: movement, difficulty,
/// spawning, bullet motion, debris motion, collisions, visual entities.
fn playing_frame(
    state: &mut GameState,
    input: &TickInput,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) {
    // Held movement, then edge-triggered fire
    if input.left {
        state.rocket.slide(-state.rocket.speed);
    }
    if input.right {
        state.rocket.slide(state.rocket.speed);
    }
    if input.fire {
        state.rocket.fire();
    }

    // Difficulty steps exactly at window boundaries
    state.elapsed_frames += 1;
    progression::advance(state, tuning, events);

    // Timer-driven spawning
    spawn::run_timer(state, tuning);

    // Bullets fly up and vanish off the top
    for bullet in &mut state.rocket.bullets {
        bullet.advance();
    }
    state.rocket.bullets.retain(|b| !b.off_screen());

    // Debris falls; every one that leaves the arena is replaced at the top
    let mut fell_out = 0;
    state.debris.retain_mut(|d| {
        d.advance();
        if d.off_screen() {
            fell_out += 1;
            false
        } else {
            true
        }
    });
    for _ in 0..fell_out {
        spawn::respawn_replacement(state, tuning);
    }

    resolve_collisions(state, tuning, events);

    // Transient visuals last; they never feed back into gameplay
    for particle in &mut state.particles {
        particle.advance();
    }
    state.particles.retain(|p| p.alive());
    for star in &mut state.stars {
        star.advance();
    }
}

/// Bullet checks run before the rocket check for each debris, so a debris
/// shot this frame can never also end the run this frame. Removal indices
/// are collected during the scan and applied afterwards.
fn resolve_collisions(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    let mut shot_debris: Vec<usize> = Vec::new();
    let mut spent_bullets: Vec<usize> = Vec::new();

    'debris: for (di, debris) in state.debris.iter().enumerate() {
        for (bi, bullet) in state.rocket.bullets.iter().enumerate() {
            if spent_bullets.contains(&bi) {
                continue;
            }
            if collision::bullet_hits_debris(bullet, debris) {
                shot_debris.push(di);
                spent_bullets.push(bi);
                state.score += SCORE_PER_DEBRIS;
                events.push(GameEvent::DebrisShot { at: debris.pos });
                for _ in 0..SCATTER_BURST {
                    let p = ScatterParticle::burst(&mut state.rng, debris.pos);
                    state.particles.push(p);
                }
                // one bullet per debris per frame
                continue 'debris;
            }
        }
        if collision::rocket_hits_debris(&state.rocket, debris) {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::RunEnded {
                score: state.score,
                level: state.difficulty_level,
            });
            break;
        }
    }

    // Apply removals back to front so earlier indices stay valid
    for &di in shot_debris.iter().rev() {
        state.debris.remove(di);
    }
    spent_bullets.sort_unstable();
    for &bi in spent_bullets.iter().rev() {
        state.rocket.bullets.remove(bi);
    }

    // Shot debris get replacements, even on the frame the run ends
    for _ in 0..shot_debris.len() {
        spawn::respawn_replacement(state, tuning);
    }
}
