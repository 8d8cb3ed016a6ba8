//! Status bar rendering with keybindings and canvas state

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `last_failed` colours the badge red when the previous submission reported an error.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    submitted: usize,
    last_failed: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let badge = Span::styled(
        format!(" #{} ", submitted),
        Style::default()
            .bg(if last_failed {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.success
            })
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );

    let left = Line::from(vec![
        badge,
        Span::styled(" | ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(message.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ]);
    frame.render_widget(Paragraph::new(left), layout[0]);

    let key_style = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(DEFAULT_THEME.comment);
    let right = Line::from(vec![
        Span::styled("Enter", key_style),
        Span::styled(" run  ", text_style),
        Span::styled("↑/↓", key_style),
        Span::styled(" history  ", text_style),
        Span::styled("PgUp/PgDn", key_style),
        Span::styled(" output  ", text_style),
        Span::styled("←/→ ⇧↑/⇧↓", key_style),
        Span::styled(" canvas  ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(" quit ", text_style),
    ]);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), layout[1]);
}
