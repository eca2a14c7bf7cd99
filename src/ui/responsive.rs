//! Placeholder for terminals too small to draw the game.

use crate::core::constants::{MIN_TERMINAL_COLS, MIN_TERMINAL_ROWS};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_TERMINAL_COLS || area.height < MIN_TERMINAL_ROWS
}

pub fn render_resizing(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let text = Paragraph::new("Resizing…")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(text, area);
}
