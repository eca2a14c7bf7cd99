//! Integration test: High score persistence
//!
//! The score file round trip, its fallbacks, and the app saving a new best
//! to disk when a run ends.

use burrow_dash::app::{App, Flow, TickSink};
use burrow_dash::core::GameConfig;
use burrow_dash::runner::{GameEvent, Obstacle, ObstacleKind, Phase};
use burrow_dash::utils::persistence::{HighScoreFile, HighScoreStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn score_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "burrowdash_it_{}_{}",
        name,
        std::process::id()
    ))
}

/// Sink that drops every tick request; the test delivers ticks itself.
struct NoTicks;

impl TickSink for NoTicks {
    fn schedule(&self, _after: Duration, _generation: u64) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_written_score_loads_back() {
    let path = score_path("roundtrip");
    let store = HighScoreFile::new(&path);

    store.save(4321);

    assert_eq!(store.load(), 4321);
    assert_eq!(HighScoreFile::new(&path).load(), 4321);
    fs::remove_file(&path).ok();
}

#[test]
fn test_corrupted_and_missing_files_load_zero() {
    let path = score_path("corrupt");
    let store = HighScoreFile::new(&path);

    fs::remove_file(&path).ok();
    assert_eq!(store.load(), 0);

    fs::write(&path, "not a number").unwrap();
    assert_eq!(store.load(), 0);

    fs::write(&path, "-5\n").unwrap();
    assert_eq!(store.load(), 0);

    fs::write(&path, " 77 \n").unwrap();
    assert_eq!(store.load(), 77);
    fs::remove_file(&path).ok();
}

#[test]
fn test_app_writes_new_best_on_crash() {
    let path = score_path("app_best");
    fs::write(&path, "3").unwrap();
    let config = GameConfig {
        spawn_chance: 0.0,
        high_score_file: path.clone(),
        ..GameConfig::default()
    };
    let store = HighScoreFile::new(&config.high_score_file);
    let mut app = App::new(config, store, ChaCha8Rng::seed_from_u64(11));
    assert_eq!(app.game.high_score, 3);
    let now = Instant::now();

    app.start(&NoTicks).unwrap();
    app.handle(GameEvent::Resize { cols: 60, rows: 20 }, now, &NoTicks)
        .unwrap();
    app.game.run.obstacles.push(Obstacle {
        position: 7,
        kind: ObstacleKind::Hole,
    });
    for _ in 0..5 {
        let flow = app
            .handle(GameEvent::Tick { generation: 0 }, now, &NoTicks)
            .unwrap();
        assert_eq!(flow, Flow::Continue);
    }

    assert_eq!(app.game.phase(), Phase::GameOver);
    assert_eq!(fs::read_to_string(&path).unwrap(), "5");
    fs::remove_file(&path).ok();
}

#[test]
fn test_app_keeps_file_when_best_not_beaten() {
    let path = score_path("app_keep");
    fs::write(&path, "900").unwrap();
    let config = GameConfig {
        spawn_chance: 0.0,
        ..GameConfig::default()
    };
    let mut app = App::new(config, HighScoreFile::new(&path), ChaCha8Rng::seed_from_u64(11));
    let now = Instant::now();

    app.handle(GameEvent::Resize { cols: 60, rows: 20 }, now, &NoTicks)
        .unwrap();
    app.game.run.obstacles.push(Obstacle {
        position: 4,
        kind: ObstacleKind::Rock,
    });
    app.handle(GameEvent::Tick { generation: 0 }, now, &NoTicks)
        .unwrap();
    app.handle(GameEvent::Tick { generation: 0 }, now, &NoTicks)
        .unwrap();

    assert_eq!(app.game.phase(), Phase::GameOver);
    assert_eq!(fs::read_to_string(&path).unwrap(), "900");
    fs::remove_file(&path).ok();
}
