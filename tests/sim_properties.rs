//! End-to-end properties of the simulation core, driven headlessly through
//! the public `tick` entry point.

use glam::Vec2;
use proptest::prelude::*;

use debris_rain::consts::SCORE_PER_DEBRIS;
use debris_rain::sim::{Bullet, Debris, GameEvent, GamePhase, GameState, TickInput, tick};
use debris_rain::tuning::Tuning;

fn playing_state(seed: u64, tuning: &Tuning) -> GameState {
    let mut state = GameState::new(seed, tuning);
    let confirm = TickInput {
        confirm: true,
        ..TickInput::default()
    };
    tick(&mut state, &confirm, tuning);
    assert_eq!(state.phase, GamePhase::Playing);
    state
}

/// Run `frames` ticks keeping the run alive by clearing the field first,
/// so progression can be observed without a collision ending the run.
fn run_cleared(state: &mut GameState, tuning: &Tuning, frames: u64) {
    for _ in 0..frames {
        state.debris.clear();
        tick(state, &TickInput::default(), tuning);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}

#[test]
fn level_two_lands_exactly_on_the_window_boundary() {
    let tuning = Tuning::default(); // window_frames = 1200
    let mut state = playing_state(11, &tuning);

    run_cleared(&mut state, &tuning, 1199);
    assert_eq!(state.difficulty_level, 1);
    assert!((state.speed_multiplier - 1.0).abs() < 1e-6);

    run_cleared(&mut state, &tuning, 1);
    assert_eq!(state.elapsed_frames, 1200);
    assert_eq!(state.difficulty_level, 2);
    assert!((state.speed_multiplier - 1.2).abs() < 1e-5);

    // still level 2 one frame short of the next boundary
    run_cleared(&mut state, &tuning, 1199);
    assert_eq!(state.elapsed_frames, 2399);
    assert_eq!(state.difficulty_level, 2);
}

#[test]
fn progression_steps_only_at_boundaries() {
    let tuning = Tuning {
        window_frames: 50,
        ..Tuning::default()
    };
    let mut state = playing_state(5, &tuning);

    let mut last_level = state.difficulty_level;
    let mut last_multiplier = state.speed_multiplier;
    for _ in 0..500 {
        state.debris.clear();
        tick(&mut state, &TickInput::default(), &tuning);

        assert!(state.difficulty_level >= last_level);
        assert!(state.speed_multiplier >= last_multiplier);
        let expected = 1 + (state.elapsed_frames / tuning.window_frames) as u32;
        assert_eq!(state.difficulty_level, expected);

        last_level = state.difficulty_level;
        last_multiplier = state.speed_multiplier;
    }
}

#[test]
fn spawn_interval_never_goes_below_the_floor() {
    // a two-frame window reaches absurd levels within seconds
    let tuning = Tuning {
        window_frames: 2,
        ..Tuning::default()
    };
    let mut state = playing_state(5, &tuning);
    for _ in 0..600 {
        state.debris.clear();
        tick(&mut state, &TickInput::default(), &tuning);
        assert!(state.spawn_interval >= tuning.spawn_interval_floor);
    }
    assert!(state.difficulty_level > 200);
    assert_eq!(state.spawn_interval, tuning.spawn_interval_floor);
}

#[test]
fn hit_scenario_scores_once_and_replaces_the_debris() {
    let tuning = Tuning::default();
    let mut state = playing_state(17, &tuning);
    state.debris.clear();
    state.rocket.bullets.clear();

    let mut d = Debris::spawn(&mut state.rng, 1.0);
    d.pos = Vec2::new(100.0, 300.0);
    d.size = 30.0;
    d.speed = 2.0;
    state.debris.push(d);
    // within size/2 of the center after one frame of motion
    state.rocket.bullets.push(Bullet::new(Vec2::new(100.0, 314.0)));

    let events = tick(&mut state, &TickInput::default(), &tuning);

    let hits = events
        .iter()
        .filter(|e| matches!(e, GameEvent::DebrisShot { .. }))
        .count();
    assert_eq!(hits, 1);
    assert_eq!(state.score, SCORE_PER_DEBRIS);
    assert!(state.rocket.bullets.is_empty());
    assert_eq!(state.debris.len(), 1);
    assert!(state.debris[0].pos.y < 0.0, "replacement arrives at the top");
}

#[test]
fn overlap_scenario_ends_the_run() {
    let tuning = Tuning::default();
    let mut state = playing_state(17, &tuning);
    state.debris.clear();

    // rocket rect is (380, 480, 40x100); debris box top-left (390, 500)
    let mut d = Debris::spawn(&mut state.rng, 1.0);
    d.pos = Vec2::new(405.0, 515.0);
    d.size = 30.0;
    d.speed = 0.0;
    state.debris.push(d);

    let events = tick(&mut state, &TickInput::default(), &tuning);
    assert_eq!(state.phase, GamePhase::GameOver);
    assert!(
        events
            .iter()
            .any(|e| matches!(e, GameEvent::RunEnded { .. }))
    );

    // GameOver freezes the sim until restart
    let frozen = state.elapsed_frames;
    tick(&mut state, &TickInput::default(), &tuning);
    assert_eq!(state.elapsed_frames, frozen);
}

#[test]
fn restart_after_real_play_resets_everything() {
    let tuning = Tuning::default();
    let mut state = playing_state(23, &tuning);

    let fire = TickInput {
        fire: true,
        ..TickInput::default()
    };
    for _ in 0..200 {
        if state.phase != GamePhase::Playing {
            break;
        }
        tick(&mut state, &fire, &tuning);
    }

    let restart = TickInput {
        restart: true,
        ..TickInput::default()
    };
    tick(&mut state, &restart, &tuning);

    assert_eq!(state.phase, GamePhase::StartScreen);
    assert_eq!(state.score, 0);
    assert_eq!(state.difficulty_level, 1);
    assert_eq!(state.speed_multiplier, 1.0);
    assert_eq!(state.elapsed_frames, 0);
    assert!(state.rocket.bullets.is_empty());
    assert!(state.particles.is_empty());
    assert_eq!(state.debris.len(), tuning.max_debris);
    assert_eq!(state.rocket.launchers, 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn debris_population_stays_bounded(seed in any::<u64>()) {
        let tuning = Tuning::default();
        let mut state = playing_state(seed, &tuning);
        let fire = TickInput { fire: true, ..TickInput::default() };

        for frame in 0..400u64 {
            // alternate movement to spread bullets across the field
            let input = TickInput {
                left: frame % 4 < 2,
                right: frame % 4 >= 2,
                ..fire
            };
            tick(&mut state, &input, &tuning);
            prop_assert!(state.debris.len() <= tuning.max_debris);
            if state.phase != GamePhase::Playing {
                break;
            }
        }
    }

    #[test]
    fn score_rises_by_ten_per_confirmed_hit(seed in any::<u64>()) {
        let tuning = Tuning::default();
        let mut state = playing_state(seed, &tuning);
        let fire = TickInput { fire: true, ..TickInput::default() };

        let mut total_hits: u32 = 0;
        for _ in 0..400 {
            let before = state.score;
            let events = tick(&mut state, &fire, &tuning);
            let hits = events
                .iter()
                .filter(|e| matches!(e, GameEvent::DebrisShot { .. }))
                .count() as u32;
            total_hits += hits;
            prop_assert!(state.score >= before);
            prop_assert_eq!(state.score - before, hits * SCORE_PER_DEBRIS);
            if state.phase != GamePhase::Playing {
                break;
            }
        }
        prop_assert_eq!(state.score, total_hits * SCORE_PER_DEBRIS);
    }

    #[test]
    fn same_seed_and_inputs_replay_identically(
        seed in any::<u64>(),
        script in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 0..150),
    ) {
        let tuning = Tuning::default();
        let mut a = playing_state(seed, &tuning);
        let mut b = playing_state(seed, &tuning);

        for &(left, right, fire) in &script {
            let input = TickInput { left, right, fire, ..TickInput::default() };
            tick(&mut a, &input, &tuning);
            tick(&mut b, &input, &tuning);
        }

        prop_assert_eq!(a.score, b.score);
        prop_assert_eq!(a.elapsed_frames, b.elapsed_frames);
        prop_assert_eq!(a.phase, b.phase);
        prop_assert_eq!(a.debris.len(), b.debris.len());
        for (da, db) in a.debris.iter().zip(&b.debris) {
            prop_assert_eq!(da.pos, db.pos);
            prop_assert_eq!(da.size, db.size);
        }
        prop_assert_eq!(a.rocket.x, b.rocket.x);
        prop_assert_eq!(a.rocket.bullets.len(), b.rocket.bullets.len());
    }
}
