//! Command input line rendering

use crate::command::Command;
use crate::session::PROMPT;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the input box and place the cursor after the typed text.
///
/// The block title shows usage for the command being typed once its name is recognized.
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str) {
    let hint = input
        .split_whitespace()
        .next()
        .map(Command::from_name)
        .filter(|cmd| *cmd != Command::Invalid)
        .map(|cmd| format!(" {} ", cmd.usage()))
        .unwrap_or_else(|| " Command ".to_string());

    let block = Block::default()
        .title(hint)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    let cursor_x = area.x + 1 + (PROMPT.chars().count() + input.chars().count()) as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    frame.set_cursor_position(Position::new(cursor_x.min(max_x), area.y + 1));
}
