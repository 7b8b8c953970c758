//! Debris population control
//!
//! Two spawn paths share one rule: never push the population above
//! `max_debris`. The timer path grows the field on a cadence; the replacement
//! path refills immediately when a debris leaves the arena or is shot, so the
//! field stays near target without waiting out the timer.

use rand::Rng;

use crate::consts::ARENA_HEIGHT;
use crate::tuning::Tuning;

use super::state::{Debris, GameState};

/// Advance the spawn timer; at the interval boundary, spawn one debris if
/// the field is below target. The timer resets either way.
pub fn run_timer(state: &mut GameState, tuning: &Tuning) {
    state.spawn_timer += 1;
    if state.spawn_timer >= state.spawn_interval {
        if state.debris.len() < tuning.max_debris {
            let d = Debris::spawn(&mut state.rng, state.speed_multiplier);
            state.debris.push(d);
        }
        state.spawn_timer = 0;
    }
}

/// Refill after a removal. No-op at target population.
pub fn respawn_replacement(state: &mut GameState, tuning: &Tuning) {
    if state.debris.len() < tuning.max_debris {
        let d = Debris::spawn(&mut state.rng, state.speed_multiplier);
        state.debris.push(d);
    }
}

/// Populate a fresh run: a full field scattered across the height above the
/// arena so it does not arrive as one wall.
pub fn seed_initial_field(state: &mut GameState, tuning: &Tuning) {
    for _ in 0..tuning.max_debris {
        let mut d = Debris::spawn(&mut state.rng, state.speed_multiplier);
        d.pos.y = state.rng.random_range(-ARENA_HEIGHT..0.0);
        state.debris.push(d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(tuning: &Tuning) -> GameState {
        GameState::new(42, tuning)
    }

    #[test]
    fn initial_field_is_exactly_the_target_population() {
        let tuning = Tuning::default();
        let s = state(&tuning);
        assert_eq!(s.debris.len(), tuning.max_debris);
        for d in &s.debris {
            assert!(d.pos.y < 0.0);
        }
    }

    #[test]
    fn timer_spawn_waits_for_the_interval() {
        let tuning = Tuning::default();
        let mut s = state(&tuning);
        s.debris.clear();
        for _ in 0..s.spawn_interval - 1 {
            run_timer(&mut s, &tuning);
        }
        assert!(s.debris.is_empty());
        run_timer(&mut s, &tuning);
        assert_eq!(s.debris.len(), 1);
        assert_eq!(s.spawn_timer, 0);
    }

    #[test]
    fn timer_resets_even_when_the_field_is_full() {
        let tuning = Tuning::default();
        let mut s = state(&tuning);
        s.spawn_timer = s.spawn_interval - 1;
        run_timer(&mut s, &tuning);
        // at cap: no growth, but the timer still restarts from zero
        assert_eq!(s.debris.len(), tuning.max_debris);
        assert_eq!(s.spawn_timer, 0);
    }

    #[test]
    fn replacement_respects_the_cap() {
        let tuning = Tuning::default();
        let mut s = state(&tuning);
        respawn_replacement(&mut s, &tuning);
        assert_eq!(s.debris.len(), tuning.max_debris);

        s.debris.pop();
        respawn_replacement(&mut s, &tuning);
        assert_eq!(s.debris.len(), tuning.max_debris);
    }

    #[test]
    fn replacement_spawns_at_the_top_with_current_multiplier() {
        let tuning = Tuning::default();
        let mut s = state(&tuning);
        s.debris.clear();
        s.speed_multiplier = 2.0;
        respawn_replacement(&mut s, &tuning);
        let d = &s.debris[0];
        assert_eq!(d.pos.y, -d.size / 2.0);
        // base roll is 2..=5, so a 2x multiplier puts speed in 4..=10
        assert!(d.speed >= 4.0 && d.speed <= 10.0);
    }
}
