//! Shared panel helpers.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Areas of the three stacked panels.
pub struct PanelLayout {
    /// One-line distance bar (with border).
    pub hud: Rect,
    /// Grid or game-over panel (with border).
    pub game: Rect,
    /// One-line controls bar (with border).
    pub controls: Rect,
}

/// Stack the panels from the top of `area`. `game_inner_height` is the
/// number of text rows inside the middle panel's border.
///
/// ```text
/// ┌──────────────────────┐
/// │ Distance: 12         │
/// └──────────────────────┘
/// ┌─ Burrow Dash ────────┐
/// │ [game_inner_height]  │
/// └──────────────────────┘
/// ┌──────────────────────┐
/// │ controls             │
/// └──────────────────────┘
/// ```
pub fn stack_panels(area: Rect, game_inner_height: u16) -> PanelLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(game_inner_height + 2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    PanelLayout {
        hud: chunks[0],
        game: chunks[1],
        controls: chunks[2],
    }
}

/// Draw a bordered box holding one line of text.
pub fn render_bar(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(Span::styled(text, Style::default().fg(color))).block(block);
    frame.render_widget(paragraph, area);
}

/// Draw a bordered, titled panel and return its inner area.
pub fn render_panel_frame(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Center `lines` in `area`; the first line is the bold title.
pub fn render_centered_lines(frame: &mut Frame, area: Rect, lines: &[String], color: Color) {
    let content_height = lines.len() as u16;
    let y_offset = area.y + area.height.saturating_sub(content_height) / 2;

    let text: Vec<Line> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let style = if i == 0 {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(line.as_str(), style))
        })
        .collect();

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(
        paragraph,
        Rect::new(
            area.x,
            y_offset,
            area.width,
            content_height.min(area.height),
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_panels_heights() {
        let layout = stack_panels(Rect::new(0, 0, 80, 24), 16);
        assert_eq!(layout.hud, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.game, Rect::new(0, 3, 80, 18));
        assert_eq!(layout.controls, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn test_stack_panels_game_over_height() {
        let layout = stack_panels(Rect::new(0, 0, 80, 24), 7);
        assert_eq!(layout.game.height, 9);
        assert_eq!(layout.controls.y, 12);
    }
}
