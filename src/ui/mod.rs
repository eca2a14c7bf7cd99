//! Terminal drawing.

pub mod dash_scene;
pub mod game_common;
pub mod responsive;

use crate::runner::DashGame;
use ratatui::Frame;
use std::time::Instant;

/// Draw one frame: the game, or a placeholder while the terminal is tiny.
pub fn draw(frame: &mut Frame, game: &DashGame, now: Instant) {
    let area = frame.size();
    if responsive::is_too_small(area) {
        responsive::render_resizing(frame, area);
        return;
    }
    dash_scene::render_dash_scene(frame, area, game, now);
}
