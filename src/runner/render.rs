//! Text rendering of the run, independent of the terminal.
//!
//! The grid is `rows x cols` cells, each two terminal columns wide, so
//! every glyph is a two-column string (one wide emoji or two ASCII chars).

use super::logic::restart_countdown;
use super::types::{GridLayout, ObstacleKind, RunState};
use crate::core::constants::PLAYER_COLUMN;
use crate::core::GlyphSet;
use std::time::Instant;

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Blank,
    Ground,
    Rock,
    Player,
}

impl Tile {
    pub fn glyph(self, glyphs: GlyphSet) -> &'static str {
        match (self, glyphs) {
            (Tile::Blank, _) => "  ",
            (Tile::Ground, GlyphSet::Emoji) => "🟫",
            (Tile::Rock, GlyphSet::Emoji) => "🪨",
            (Tile::Player, GlyphSet::Emoji) => "🐹",
            (Tile::Ground, GlyphSet::Ascii) => "==",
            (Tile::Rock, GlyphSet::Ascii) => "/\\",
            (Tile::Player, GlyphSet::Ascii) => "@ ",
        }
    }
}

/// Build the tile grid, top row first.
pub fn render_grid(run: &RunState, layout: &GridLayout) -> Vec<Vec<Tile>> {
    let rows = layout.rows as usize;
    let cols = layout.cols as usize;
    let mut grid = vec![vec![Tile::Blank; cols]; rows];
    if rows == 0 || cols == 0 {
        return grid;
    }

    let ground = rows - 1;
    grid[ground].fill(Tile::Ground);

    for obstacle in &run.obstacles {
        let Some(col) = in_bounds(obstacle.position, cols) else {
            continue;
        };
        match obstacle.kind {
            ObstacleKind::Hole => grid[ground][col] = Tile::Blank,
            ObstacleKind::Rock => {
                if ground >= 1 {
                    grid[ground - 1][col] = Tile::Rock;
                }
            }
        }
    }

    if let (Some(row), Some(col)) = (
        in_bounds(run.player_height, rows),
        in_bounds(PLAYER_COLUMN, cols),
    ) {
        grid[row][col] = Tile::Player;
    }

    grid
}

fn in_bounds(index: i32, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

/// The grid as one string per row.
pub fn grid_lines(run: &RunState, layout: &GridLayout, glyphs: GlyphSet) -> Vec<String> {
    render_grid(run, layout)
        .iter()
        .map(|row| row.iter().map(|tile| tile.glyph(glyphs)).collect())
        .collect()
}

/// Text of the game-over panel: title, blank, distance, high score, blank,
/// restart hint, blank. Seven lines.
pub fn game_over_lines(run: &RunState, high_score: u64, now: Instant) -> Vec<String> {
    let hint = match restart_countdown(run, now) {
        0 => "Press Space to go again".to_string(),
        secs => format!("You can go again in {}…", secs),
    };
    vec![
        "Game over!".to_string(),
        String::new(),
        format!("Distance: {}", run.distance),
        format!("High score: {}", high_score),
        String::new(),
        hint,
        String::new(),
    ]
}

/// Text of the top bar.
pub fn distance_line(run: &RunState) -> String {
    format!("Distance: {}", run.distance)
}
