//! Data-driven difficulty balance
//!
//! The two historical builds of the game disagreed on progression constants
//! (20 s vs 30 s difficulty windows, different spawn-interval decay). Both
//! live here as data: `Default` is the faster ramp, [`Tuning::relaxed`] the
//! slower one, and a JSON file can override any individual field.

use serde::{Deserialize, Serialize};

/// Difficulty-policy parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Frames between difficulty steps (1200 = 20 s at 60 Hz)
    pub window_frames: u64,
    /// Speed-multiplier increase per difficulty level
    pub speed_step: f32,
    /// Spawn interval at level 1, in frames
    pub spawn_interval_base: u32,
    /// The spawn interval never decays below this
    pub spawn_interval_floor: u32,
    /// Spawn-interval decrease per level, in frames
    pub spawn_decay: u32,
    /// A launcher upgrade fires every N levels
    pub upgrade_every_levels: u32,
    /// Target debris population
    pub max_debris: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_frames: 1200,
            speed_step: 0.2,
            spawn_interval_base: 60,
            spawn_interval_floor: 15,
            spawn_decay: 8,
            upgrade_every_levels: 2,
            max_debris: 15,
        }
    }
}

impl Tuning {
    /// The slower historical ramp: 30 s windows, gentler interval decay
    pub fn relaxed() -> Self {
        Self {
            window_frames: 1800,
            spawn_interval_floor: 20,
            spawn_decay: 5,
            ..Self::default()
        }
    }

    /// Environment variable naming an override file
    const ENV_PATH: &'static str = "DEBRIS_RAIN_TUNING";

    /// Load tuning from the file named by `DEBRIS_RAIN_TUNING`, falling
    /// back to defaults when the variable is unset or the file is bad.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_PATH) else {
            return Self::default();
        };
        let path = path.to_string_lossy().into_owned();
        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Bad tuning file {path}: {e}; using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {path}: {e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_fast_ramp() {
        let t = Tuning::default();
        assert_eq!(t.window_frames, 1200);
        assert_eq!(t.spawn_interval_floor, 15);
        assert_eq!(t.spawn_decay, 8);
        assert_eq!(t.max_debris, 15);
    }

    #[test]
    fn relaxed_only_changes_the_divergent_constants() {
        let t = Tuning::relaxed();
        assert_eq!(t.window_frames, 1800);
        assert_eq!(t.spawn_interval_floor, 20);
        assert_eq!(t.spawn_decay, 5);
        // the rest matches the default build
        assert_eq!(t.speed_step, Tuning::default().speed_step);
        assert_eq!(t.max_debris, Tuning::default().max_debris);
    }

    #[test]
    fn partial_json_overrides_one_field() {
        let t: Tuning = serde_json::from_str(r#"{"window_frames": 600}"#).unwrap();
        assert_eq!(t.window_frames, 600);
        assert_eq!(t.spawn_interval_base, Tuning::default().spawn_interval_base);
    }
}
