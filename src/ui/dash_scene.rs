//! Burrow Dash screen: distance bar, play field or game-over panel, and
//! the controls bar.

use super::game_common::{render_bar, render_centered_lines, render_panel_frame, stack_panels};
use crate::core::constants::{CONTROLS_GAME_OVER, CONTROLS_RUNNING, GAME_OVER_PANEL_ROWS};
use crate::runner::render::{distance_line, game_over_lines, grid_lines};
use crate::runner::{DashGame, Phase};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

const TITLE: &str = " Burrow Dash ";

pub fn render_dash_scene(frame: &mut Frame, area: Rect, game: &DashGame, now: Instant) {
    let phase = game.phase();
    let inner_height = match phase {
        Phase::Running => game.layout.rows,
        Phase::GameOver => GAME_OVER_PANEL_ROWS,
    };
    let panels = stack_panels(area, inner_height);

    render_bar(frame, panels.hud, &distance_line(&game.run), Color::Cyan);

    match phase {
        Phase::Running => {
            let inner = render_panel_frame(frame, panels.game, TITLE, Color::LightYellow);
            render_play_field(frame, inner, game);
            render_bar(frame, panels.controls, CONTROLS_RUNNING, Color::DarkGray);
        }
        Phase::GameOver => {
            let inner = render_panel_frame(frame, panels.game, TITLE, Color::Red);
            let lines = game_over_lines(&game.run, game.high_score, now);
            render_centered_lines(frame, inner, &lines, Color::Red);
            render_bar(frame, panels.controls, CONTROLS_GAME_OVER, Color::DarkGray);
        }
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &DashGame) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let lines: Vec<Line> = grid_lines(&game.run, &game.layout, game.config.glyphs)
        .into_iter()
        .map(Line::from)
        .collect();
    let field = Paragraph::new(lines).style(Style::default().fg(Color::White));
    frame.render_widget(field, area);
}
