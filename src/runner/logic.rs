//! Burrow Dash game logic: the event reducer, per-tick physics, spawning,
//! collision detection and restarts.
//!
//! `update` is the only entry point. It applies one event to the game and
//! returns the effects the caller must carry out (schedule the next tick,
//! persist a high score, quit). Nothing here touches the terminal, the
//! clock or the filesystem; time and randomness are passed in.

use super::types::*;
use crate::core::constants::{OBSTACLE_DESPAWN_POSITION, PLAYER_COLUMN};
use rand::Rng;
use std::time::{Duration, Instant};

/// Apply one event.
pub fn update<R: Rng>(
    game: &mut DashGame,
    event: GameEvent,
    now: Instant,
    rng: &mut R,
) -> Vec<Effect> {
    match event {
        GameEvent::Tick { generation } => process_tick(game, generation, now, rng),
        GameEvent::Jump => process_jump(game, now),
        GameEvent::Resize { cols, rows } => {
            resize(game, cols, rows);
            Vec::new()
        }
        GameEvent::Quit => vec![Effect::Quit],
    }
}

/// Recompute the grid for a new terminal size and put the character back
/// on the (possibly moved) ground. Velocity is kept, so a jump in
/// progress carries on from there.
pub fn resize(game: &mut DashGame, cols: u16, rows: u16) {
    game.layout = GridLayout::from_terminal(cols, rows);
    game.run.player_height = game.layout.rest_height();
}

fn process_jump(game: &mut DashGame, now: Instant) -> Vec<Effect> {
    if game.run.is_over {
        return match game.run.restart_eligible_at {
            Some(at) if now < at => Vec::new(),
            _ => vec![restart(game)],
        };
    }

    // No double jump: only from the ground
    if game.layout.is_ready() && game.is_on_ground() {
        game.run.vertical_velocity = game.config.jump_velocity;
    }
    Vec::new()
}

fn process_tick<R: Rng>(
    game: &mut DashGame,
    generation: u64,
    now: Instant,
    rng: &mut R,
) -> Vec<Effect> {
    if generation != game.run.generation {
        log::trace!(
            "dropping stale tick (generation {}, current {})",
            generation,
            game.run.generation
        );
        return Vec::new();
    }

    // Keep ticking while over so the countdown redraws
    if game.run.is_over {
        return vec![Effect::ScheduleTick {
            after: game.config.game_over_refresh(),
            generation,
        }];
    }

    if !game.layout.is_ready() {
        return vec![schedule_next(game)];
    }

    let mut effects = step(game, now, rng);
    effects.push(schedule_next(game));
    effects
}

/// One gameplay step. Returns a `SaveHighScore` effect if the run ended
/// on a new best.
fn step<R: Rng>(game: &mut DashGame, now: Instant, rng: &mut R) -> Vec<Effect> {
    let mut effects = Vec::new();

    // 1. Distance
    game.run.distance += 1;

    // 2. Physics
    apply_physics(game);

    // 3. Scroll
    scroll_obstacles(&mut game.run.obstacles);

    // 4. Spawn
    maybe_spawn(game, rng);

    // 5. Collision
    if let Some(kind) = detect_collision(game) {
        log::info!(
            "run over at distance {} ({:?} at column {})",
            game.run.distance,
            kind,
            PLAYER_COLUMN
        );
        if let Some(effect) = end_run(game, now) {
            effects.push(effect);
        }
    }

    // 6. Speed ramp
    game.run.frame_interval = accelerate(
        game.run.frame_interval,
        game.config.accel_factor,
        game.config.min_frame(),
    );

    effects
}

fn apply_physics(game: &mut DashGame) {
    let rest = game.layout.rest_height();
    let run = &mut game.run;
    run.vertical_velocity += game.config.gravity;
    run.player_height += run.vertical_velocity;
    if run.player_height >= rest {
        run.player_height = rest;
        run.vertical_velocity = 0;
    }
}

/// Move everything one cell left and drop what has left the screen.
pub fn scroll_obstacles(obstacles: &mut Vec<Obstacle>) {
    for obstacle in obstacles.iter_mut() {
        obstacle.position -= 1;
    }
    obstacles.retain(|o| o.position >= OBSTACLE_DESPAWN_POSITION);
}

/// Maybe add an obstacle past the right edge, if the furthest one is far
/// enough from it.
fn maybe_spawn<R: Rng>(game: &mut DashGame, rng: &mut R) {
    let furthest = game
        .run
        .obstacles
        .iter()
        .map(|o| o.position)
        .max()
        .unwrap_or(-1);
    let cols = game.layout.cols as i32;
    if furthest >= cols - game.config.min_gap_cells - 1 {
        return;
    }
    if rng.gen::<f64>() >= game.config.spawn_chance {
        return;
    }

    let kind = if rng.gen::<f64>() < 0.5 {
        ObstacleKind::Rock
    } else {
        ObstacleKind::Hole
    };
    let position = cols + rng.gen_range(0..=game.config.max_spawn_offset);
    game.run.obstacles.push(Obstacle { position, kind });
}

/// First obstacle at the player's column that hits a grounded character.
/// Holes and rocks share the rule: standing on the ground when one passes
/// ends the run, being in the air clears it.
pub fn detect_collision(game: &DashGame) -> Option<ObstacleKind> {
    let grounded = game.run.player_height >= game.layout.rest_height();
    if !grounded {
        return None;
    }
    game.run
        .obstacles
        .iter()
        .find(|o| o.position == PLAYER_COLUMN)
        .map(|o| o.kind)
}

/// Running -> GameOver. Starts the restart cooldown and records a new best.
fn end_run(game: &mut DashGame, now: Instant) -> Option<Effect> {
    game.run.is_over = true;
    game.run.restart_eligible_at = Some(now + game.config.cooldown());
    if game.run.distance > game.high_score {
        game.high_score = game.run.distance;
        log::info!("new high score {}", game.high_score);
        return Some(Effect::SaveHighScore(game.high_score));
    }
    None
}

/// GameOver -> Running. Everything but the layout and the best distance is
/// reset, and the generation bump orphans ticks still in flight.
fn restart(game: &mut DashGame) -> Effect {
    let run = &mut game.run;
    run.distance = 0;
    run.player_height = game.layout.rest_height();
    run.vertical_velocity = 0;
    run.obstacles.clear();
    run.frame_interval = game.config.start_frame();
    run.is_over = false;
    run.restart_eligible_at = None;
    run.generation += 1;
    log::info!("restarting, generation {}", run.generation);
    schedule_next(game)
}

fn schedule_next(game: &DashGame) -> Effect {
    Effect::ScheduleTick {
        after: game.run.frame_interval,
        generation: game.run.generation,
    }
}

/// Shrink the interval by `factor`, truncating to whole nanoseconds, but
/// not below `floor`.
pub fn accelerate(interval: Duration, factor: f64, floor: Duration) -> Duration {
    let nanos = (interval.as_nanos() as f64 * factor) as u64;
    Duration::from_nanos(nanos).max(floor)
}

/// Whole seconds (rounded up) until a restart is allowed.
pub fn restart_countdown(run: &RunState, now: Instant) -> u64 {
    let Some(at) = run.restart_eligible_at else {
        return 0;
    };
    let left = at.saturating_duration_since(now);
    left.as_secs() + u64::from(left.subsec_nanos() > 0)
}
