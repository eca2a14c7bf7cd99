//! Burrow Dash data structures.
//!
//! One run is a `RunState`; the surrounding `DashGame` adds the grid
//! layout derived from the terminal, the best distance so far, and the
//! tuning the run was started with.

use crate::core::constants::{
    BAR_ROWS, CELL_WIDTH, MIN_GRID_COLS, MIN_GRID_ROWS, PANEL_BORDER_ROWS,
};
use crate::core::GameConfig;
use std::time::{Duration, Instant};

/// Hazard kinds. Both are cleared the same way: be airborne when it passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// A gap in the ground.
    Hole,
    /// A rock sitting on the ground.
    Rock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    /// Horizontal grid cell. Goes down to -1 before the obstacle is dropped.
    pub position: i32,
    pub kind: ObstacleKind,
}

/// Grid dimensions derived from the terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridLayout {
    pub rows: u16,
    pub cols: u16,
}

impl GridLayout {
    /// Fit the grid into a `width` x `height` terminal, leaving room for the
    /// HUD and controls bars and the three panel borders. Never smaller
    /// than 5 rows by 10 cells.
    pub fn from_terminal(width: u16, height: u16) -> Self {
        let rows = height
            .saturating_sub(BAR_ROWS + PANEL_BORDER_ROWS)
            .max(MIN_GRID_ROWS);
        let cols = (width.saturating_sub(2) / CELL_WIDTH).max(MIN_GRID_COLS);
        Self { rows, cols }
    }

    /// False until the first terminal size is known.
    pub fn is_ready(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }

    /// Bottom row, filled with ground.
    pub fn ground_row(&self) -> i32 {
        self.rows as i32 - 1
    }

    /// Row of a character standing on the ground.
    pub fn rest_height(&self) -> i32 {
        self.rows as i32 - 2
    }
}

/// Whether a run is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Mutable state of one play-through.
#[derive(Debug, Clone, PartialEq)]
pub struct RunState {
    /// Ticks survived this run.
    pub distance: u64,
    /// Row of the character; smaller is higher.
    pub player_height: i32,
    /// Rows per tick, negative = upward.
    pub vertical_velocity: i32,
    /// Live obstacles in spawn order.
    pub obstacles: Vec<Obstacle>,
    /// Delay before the next tick. Shrinks every tick.
    pub frame_interval: Duration,
    /// Bumped on every restart; ticks carrying an older value are ignored.
    pub generation: u64,
    pub is_over: bool,
    /// Restart input is ignored before this instant.
    pub restart_eligible_at: Option<Instant>,
}

impl RunState {
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            distance: 0,
            player_height: 0,
            vertical_velocity: 0,
            obstacles: Vec::new(),
            frame_interval,
            generation: 0,
            is_over: false,
            restart_eligible_at: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_over {
            Phase::GameOver
        } else {
            Phase::Running
        }
    }
}

/// Events consumed by the game loop, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Timer tick, tagged with the generation current when it was scheduled.
    Tick { generation: u64 },
    /// Jump, or restart when the run is over.
    Jump,
    /// New terminal size in columns and rows.
    Resize { cols: u16, rows: u16 },
    Quit,
}

/// Side effects requested by the game loop, carried out by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `GameEvent::Tick { generation }` after `after`.
    ScheduleTick { after: Duration, generation: u64 },
    /// Persist a new best distance.
    SaveHighScore(u64),
    /// Leave the program.
    Quit,
}

/// Complete game: current run, layout, best distance and tuning.
#[derive(Debug, Clone)]
pub struct DashGame {
    pub run: RunState,
    pub layout: GridLayout,
    pub high_score: u64,
    pub config: GameConfig,
}

impl DashGame {
    /// New game waiting for its first terminal size.
    pub fn new(config: GameConfig, high_score: u64) -> Self {
        Self {
            run: RunState::new(config.start_frame()),
            layout: GridLayout::default(),
            high_score,
            config,
        }
    }

    /// The tick that starts the loop.
    pub fn first_tick(&self) -> Effect {
        Effect::ScheduleTick {
            after: self.run.frame_interval,
            generation: self.run.generation,
        }
    }

    pub fn phase(&self) -> Phase {
        self.run.phase()
    }

    /// Is the character standing on the ground?
    pub fn is_on_ground(&self) -> bool {
        self.run.player_height == self.layout.rest_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = DashGame::new(GameConfig::default(), 17);
        assert_eq!(game.high_score, 17);
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.run.distance, 0);
        assert_eq!(game.run.generation, 0);
        assert!(game.run.obstacles.is_empty());
        assert!(game.run.restart_eligible_at.is_none());
        assert_eq!(game.run.frame_interval, Duration::from_millis(45));
        assert!(!game.layout.is_ready());
    }

    #[test]
    fn test_first_tick_uses_start_interval() {
        let game = DashGame::new(GameConfig::default(), 0);
        assert_eq!(
            game.first_tick(),
            Effect::ScheduleTick {
                after: Duration::from_millis(45),
                generation: 0
            }
        );
    }

    #[test]
    fn test_layout_from_regular_terminal() {
        let layout = GridLayout::from_terminal(80, 24);
        assert_eq!(layout.rows, 16);
        assert_eq!(layout.cols, 39);
        assert_eq!(layout.ground_row(), 15);
        assert_eq!(layout.rest_height(), 14);
    }

    #[test]
    fn test_layout_minimums_on_tiny_terminal() {
        let layout = GridLayout::from_terminal(6, 3);
        assert_eq!(layout.rows, 5);
        assert_eq!(layout.cols, 10);
        assert_eq!(layout.rest_height(), 3);
    }

    #[test]
    fn test_layout_default_is_not_ready() {
        assert!(!GridLayout::default().is_ready());
        assert!(GridLayout::from_terminal(0, 0).is_ready());
    }

    #[test]
    fn test_phase_follows_is_over() {
        let mut run = RunState::new(Duration::from_millis(45));
        assert_eq!(run.phase(), Phase::Running);
        run.is_over = true;
        assert_eq!(run.phase(), Phase::GameOver);
    }
}
