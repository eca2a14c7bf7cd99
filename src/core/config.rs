//! Tunable game settings.
//!
//! Read from `burrowdash.json` in the working directory (or a path given
//! with `--config`). Every field has a default, so a partial file only
//! overrides what it names and a missing or broken file means defaults.

use super::constants::*;
use crate::utils::persistence::read_json;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Sprite set used by the grid renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Emoji,
    Ascii,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub start_frame_ms: u64,
    pub accel_factor: f64,
    /// Lower bound for the tick interval. 0 disables the floor.
    pub min_frame_ms: u64,
    pub cooldown_secs: u64,
    pub game_over_refresh_ms: u64,
    pub gravity: i32,
    pub jump_velocity: i32,
    pub spawn_chance: f64,
    pub min_gap_cells: i32,
    pub max_spawn_offset: i32,
    pub high_score_file: PathBuf,
    pub glyphs: GlyphSet,
    /// When set, log records are written to this file.
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_frame_ms: START_FRAME_MS,
            accel_factor: ACCEL_FACTOR,
            min_frame_ms: MIN_FRAME_MS,
            cooldown_secs: COOLDOWN_SECONDS,
            game_over_refresh_ms: GAME_OVER_REFRESH_MS,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            spawn_chance: SPAWN_CHANCE,
            min_gap_cells: MIN_GAP_CELLS,
            max_spawn_offset: MAX_SPAWN_OFFSET,
            high_score_file: PathBuf::from(HIGH_SCORE_FILE),
            glyphs: GlyphSet::Emoji,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Load from `path`, or from `burrowdash.json` in the working directory.
    ///
    /// Also returns a description of every problem found (unreadable file,
    /// out-of-range values) so the caller can log them once a logger is
    /// installed. A missing file is not a problem.
    pub fn load(path: Option<&Path>) -> (Self, Vec<String>) {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        let mut problems = Vec::new();
        let mut config = match read_json::<Self>(&path) {
            Ok(config) => config,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                problems.push(format!("ignoring {}: {}", path.display(), e));
                Self::default()
            }
        };
        problems.extend(config.sanitize());
        (config, problems)
    }

    /// Clamp values that would break the loop: zero or huge intervals, a
    /// speed-up factor above 1, gravity that never brings the character
    /// back down, cooldowns too long to add to a clock reading, negative
    /// gaps. Returns one message per corrected field.
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut fixes = Vec::new();
        let mut fix = |field: &str, from: String, to: String| {
            if from != to {
                fixes.push(format!("{} {} out of range, using {}", field, from, to));
            }
        };

        let start = self.start_frame_ms.clamp(1, MAX_START_FRAME_MS);
        fix("start_frame_ms", self.start_frame_ms.to_string(), start.to_string());
        self.start_frame_ms = start;

        if !(self.accel_factor > 0.0 && self.accel_factor <= 1.0) {
            fix("accel_factor", self.accel_factor.to_string(), ACCEL_FACTOR.to_string());
            self.accel_factor = ACCEL_FACTOR;
        }

        let floor = self.min_frame_ms.min(self.start_frame_ms);
        fix("min_frame_ms", self.min_frame_ms.to_string(), floor.to_string());
        self.min_frame_ms = floor;

        let cooldown = self.cooldown_secs.min(MAX_COOLDOWN_SECONDS);
        fix("cooldown_secs", self.cooldown_secs.to_string(), cooldown.to_string());
        self.cooldown_secs = cooldown;

        let refresh = self.game_over_refresh_ms.clamp(1, MAX_GAME_OVER_REFRESH_MS);
        fix(
            "game_over_refresh_ms",
            self.game_over_refresh_ms.to_string(),
            refresh.to_string(),
        );
        self.game_over_refresh_ms = refresh;

        let gravity = self.gravity.clamp(1, MAX_GRAVITY);
        fix("gravity", self.gravity.to_string(), gravity.to_string());
        self.gravity = gravity;

        // Always upward
        let jump = -self.jump_velocity.clamp(-MAX_JUMP_SPEED, MAX_JUMP_SPEED).abs();
        fix("jump_velocity", self.jump_velocity.to_string(), jump.to_string());
        self.jump_velocity = jump;

        if !(0.0..=1.0).contains(&self.spawn_chance) {
            let chance = if self.spawn_chance > 1.0 { 1.0 } else { 0.0 };
            fix("spawn_chance", self.spawn_chance.to_string(), chance.to_string());
            self.spawn_chance = chance;
        }

        let gap = self.min_gap_cells.max(0);
        fix("min_gap_cells", self.min_gap_cells.to_string(), gap.to_string());
        self.min_gap_cells = gap;

        let offset = self.max_spawn_offset.max(0);
        fix("max_spawn_offset", self.max_spawn_offset.to_string(), offset.to_string());
        self.max_spawn_offset = offset;

        fixes
    }

    pub fn start_frame(&self) -> Duration {
        Duration::from_millis(self.start_frame_ms)
    }

    pub fn min_frame(&self) -> Duration {
        Duration::from_millis(self.min_frame_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    pub fn game_over_refresh(&self) -> Duration {
        Duration::from_millis(self.game_over_refresh_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.start_frame(), Duration::from_millis(45));
        assert!((config.accel_factor - 0.998).abs() < f64::EPSILON);
        assert_eq!(config.cooldown(), Duration::from_secs(2));
        assert_eq!(config.gravity, 1);
        assert_eq!(config.jump_velocity, -4);
        assert_eq!(config.min_gap_cells, 4);
        assert_eq!(config.glyphs, GlyphSet::Emoji);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "spawn_chance": 0.5, "glyphs": "ascii" }"#).unwrap();
        assert!((config.spawn_chance - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.glyphs, GlyphSet::Ascii);
        assert_eq!(config.start_frame_ms, START_FRAME_MS);
        assert_eq!(config.high_score_file, PathBuf::from(HIGH_SCORE_FILE));
    }

    #[test]
    fn test_sanitize_rejects_runaway_values() {
        let mut config = GameConfig {
            start_frame_ms: 0,
            accel_factor: 1.5,
            spawn_chance: 3.0,
            min_gap_cells: -2,
            jump_velocity: 4,
            ..GameConfig::default()
        };
        let fixes = config.sanitize();
        assert_eq!(config.start_frame_ms, 1);
        assert!((config.accel_factor - ACCEL_FACTOR).abs() < f64::EPSILON);
        assert!((config.spawn_chance - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.min_gap_cells, 0);
        assert_eq!(config.jump_velocity, -4);
        assert!(config.min_frame_ms <= config.start_frame_ms);
        assert!(fixes.iter().any(|f| f.starts_with("accel_factor")));
        assert!(fixes.iter().any(|f| f.starts_with("jump_velocity")));
    }

    #[test]
    fn test_sanitize_caps_durations_that_overflow_the_clock() {
        let mut config = GameConfig {
            cooldown_secs: u64::MAX,
            start_frame_ms: u64::MAX,
            game_over_refresh_ms: u64::MAX,
            min_frame_ms: u64::MAX,
            ..GameConfig::default()
        };
        config.sanitize();
        assert_eq!(config.cooldown_secs, MAX_COOLDOWN_SECONDS);
        assert_eq!(config.start_frame_ms, MAX_START_FRAME_MS);
        assert_eq!(config.game_over_refresh_ms, MAX_GAME_OVER_REFRESH_MS);
        assert!(config.min_frame_ms <= config.start_frame_ms);
        // These additions panic on overflow when left uncapped
        let now = std::time::Instant::now();
        let _ = now + config.cooldown();
        let _ = now + config.start_frame();
    }

    #[test]
    fn test_sanitize_keeps_gravity_pulling_down() {
        for gravity in [0, -3, i32::MIN] {
            let mut config = GameConfig {
                gravity,
                ..GameConfig::default()
            };
            config.sanitize();
            assert_eq!(config.gravity, 1);
        }
        let mut config = GameConfig {
            gravity: i32::MAX,
            jump_velocity: i32::MIN,
            ..GameConfig::default()
        };
        config.sanitize();
        assert_eq!(config.gravity, MAX_GRAVITY);
        assert_eq!(config.jump_velocity, -MAX_JUMP_SPEED);
    }

    #[test]
    fn test_defaults_need_no_fixes() {
        let mut config = GameConfig::default();
        assert!(config.sanitize().is_empty());
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_zero_floor_is_allowed() {
        let mut config = GameConfig {
            min_frame_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.sanitize().is_empty());
        assert_eq!(config.min_frame(), Duration::ZERO);
    }

    #[test]
    fn test_missing_file_gives_defaults_quietly() {
        let path = std::env::temp_dir().join("burrowdash_no_such_config_8841.json");
        let _ = std::fs::remove_file(&path);
        let (config, problems) = GameConfig::load(Some(path.as_path()));
        assert_eq!(config, GameConfig::default());
        assert!(problems.is_empty());
    }

    #[test]
    fn test_broken_file_reports_problem() {
        let path = std::env::temp_dir().join(format!(
            "burrowdash_broken_config_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ \"gravity\": ").unwrap();
        let (config, problems) = GameConfig::load(Some(path.as_path()));
        assert_eq!(config, GameConfig::default());
        assert_eq!(problems.len(), 1);
        assert!(problems[0].starts_with("ignoring"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_out_of_range_file_values_are_reported() {
        let path = std::env::temp_dir().join(format!(
            "burrowdash_range_config_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "gravity": 0, "cooldown_secs": 99999999999 }"#).unwrap();
        let (config, problems) = GameConfig::load(Some(path.as_path()));
        assert_eq!(config.gravity, 1);
        assert_eq!(config.cooldown_secs, MAX_COOLDOWN_SECONDS);
        assert_eq!(problems.len(), 2);
        std::fs::remove_file(&path).ok();
    }
}
