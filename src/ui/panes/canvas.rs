//! Canvas pane rendering

use crate::canvas::grid::{ruler_digit, BLANK};
use crate::canvas::Canvas;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the canvas with the same ruler layout `DISPLAY` prints.
///
/// Rows and columns beyond the pane are cut off; `scroll` is the (row, column) of the
/// top-left visible cell.
pub fn render_canvas_pane(frame: &mut Frame, area: Rect, canvas: &Canvas, scroll: (u16, u16)) {
    let title = if canvas.is_initialized() {
        format!(
            " Canvas {}x{} · draw '{}' ",
            canvas.width(),
            canvas.height(),
            canvas.draw_char()
        )
    } else {
        " Canvas ".to_string()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if !canvas.is_initialized() {
        let paragraph = Paragraph::new("(no grid yet, try GRID 20,10)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let lines = canvas_lines(canvas);
    let paragraph = Paragraph::new(lines).block(block).scroll(scroll);
    frame.render_widget(paragraph, area);
}

/// Build styled lines: ruler digit, space, cells; then the trailing ruler
fn canvas_lines(canvas: &Canvas) -> Vec<Line<'static>> {
    let ruler_style = Style::default().fg(DEFAULT_THEME.ruler);
    let ink_style = Style::default()
        .fg(DEFAULT_THEME.ink)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = canvas
        .rows()
        .enumerate()
        .map(|(y, row)| {
            let mut spans = vec![Span::styled(format!("{} ", ruler_digit(y)), ruler_style)];
            // Group runs so a mostly blank row is only a handful of spans.
            let mut run = String::new();
            let mut run_is_ink = false;
            for c in row.chars() {
                let is_ink = c != BLANK;
                if is_ink != run_is_ink && !run.is_empty() {
                    let style = if run_is_ink { ink_style } else { Style::default() };
                    spans.push(Span::styled(std::mem::take(&mut run), style));
                }
                run_is_ink = is_ink;
                run.push(c);
            }
            if !run.is_empty() {
                let style = if run_is_ink { ink_style } else { Style::default() };
                spans.push(Span::styled(run, style));
            }
            Line::from(spans)
        })
        .collect();

    let footer: String = std::iter::once(' ')
        .chain((0..canvas.width()).map(ruler_digit))
        .collect();
    lines.push(Line::from(Span::styled(footer, ruler_style)));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Plot;

    #[test]
    fn test_lines_match_display_text() {
        let mut canvas = Canvas::new();
        canvas.initialize(4, 2).unwrap();
        canvas.plot(1, 0);
        canvas.plot(2, 0);

        let text: Vec<String> = canvas_lines(&canvas)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        let rendered = canvas.render().unwrap();
        let expected: Vec<&str> = rendered.lines().collect();

        assert_eq!(text, expected);
    }
}
