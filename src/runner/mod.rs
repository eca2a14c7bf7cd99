//! The runner itself: state, the tick-driven reducer and text rendering.

pub mod logic;
pub mod render;
pub mod types;

pub use logic::{restart_countdown, update};
pub use types::{
    DashGame, Effect, GameEvent, GridLayout, Obstacle, ObstacleKind, Phase, RunState,
};
