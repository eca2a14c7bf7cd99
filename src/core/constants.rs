// Timing
pub const START_FRAME_MS: u64 = 45; // ~22 FPS at the start of a run
pub const ACCEL_FACTOR: f64 = 0.998; // frame interval multiplier per tick
pub const MIN_FRAME_MS: u64 = 5;
pub const COOLDOWN_SECONDS: u64 = 2; // restart delay after a crash
pub const GAME_OVER_REFRESH_MS: u64 = 250; // countdown redraw cadence

// Physics (rows per tick, negative = upward)
pub const GRAVITY: i32 = 1;
pub const JUMP_VELOCITY: i32 = -4;

// Upper bounds accepted from the settings file
pub const MAX_START_FRAME_MS: u64 = 1_000;
pub const MAX_COOLDOWN_SECONDS: u64 = 60;
pub const MAX_GAME_OVER_REFRESH_MS: u64 = 1_000;
pub const MAX_GRAVITY: i32 = 10;
pub const MAX_JUMP_SPEED: i32 = 50;

// Obstacles
pub const SPAWN_CHANCE: f64 = 0.12;
pub const MIN_GAP_CELLS: i32 = 4;
pub const MAX_SPAWN_OFFSET: i32 = 3;
/// Obstacles survive one cell past the left edge so they render one last frame.
pub const OBSTACLE_DESPAWN_POSITION: i32 = -1;

// Grid
/// The character's fixed horizontal cell; collisions are checked here.
pub const PLAYER_COLUMN: i32 = 2;
pub const MIN_GRID_ROWS: u16 = 5;
pub const MIN_GRID_COLS: u16 = 10;
/// Terminal rows taken by the HUD and controls bars (one inner row each).
pub const BAR_ROWS: u16 = 2;
/// Border rows of the three stacked panels.
pub const PANEL_BORDER_ROWS: u16 = 6;
/// Every grid cell is two terminal columns wide (emoji sprites).
pub const CELL_WIDTH: u16 = 2;
/// Inner height of the middle panel while the game-over text is shown.
pub const GAME_OVER_PANEL_ROWS: u16 = 7;
/// Below this terminal size only a placeholder is drawn.
pub const MIN_TERMINAL_COLS: u16 = 4;
pub const MIN_TERMINAL_ROWS: u16 = 4;

// Files
pub const HIGH_SCORE_FILE: &str = ".burrowdash_highscore";
pub const CONFIG_FILE: &str = "burrowdash.json";

// Controls bar text
pub const CONTROLS_RUNNING: &str = "W/Space = jump   Q = quit";
pub const CONTROLS_GAME_OVER: &str = "Q = quit";
