//! Difficulty progression
//!
//! A step function of the frame counter: every `window_frames` the level
//! increments, the global speed multiplier rises, and the spawn interval
//! decays toward its floor. Saturating math keeps the interval valid at any
//! level. Every `upgrade_every_levels`-th level the rocket gains a launcher.

use crate::tuning::Tuning;

use super::state::{GameEvent, GameState};

/// Apply at most one difficulty step. Called once per frame, after
/// `elapsed_frames` has been incremented, so a boundary fires exactly once.
pub fn advance(state: &mut GameState, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    if state.elapsed_frames % tuning.window_frames != 0 {
        return;
    }

    state.difficulty_level += 1;
    state.speed_multiplier += tuning.speed_step;
    state.spawn_interval = tuning
        .spawn_interval_base
        .saturating_sub(tuning.spawn_decay.saturating_mul(state.difficulty_level))
        .max(tuning.spawn_interval_floor);
    events.push(GameEvent::LevelUp {
        level: state.difficulty_level,
    });

    if state.difficulty_level % tuning.upgrade_every_levels == 0 {
        state.rocket.upgrade();
        events.push(GameEvent::LauncherAdded {
            launchers: state.rocket.launchers,
        });
    }
}
