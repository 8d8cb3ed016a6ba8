//! Main TUI application state and logic

use crate::interpreter::{Flow, Interpreter};
use crate::session::transcript::LineKind;
use crate::session::{submit_line, Transcript};
use crate::ui::panes;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// The interpreter instance
    pub interpreter: Interpreter,

    /// Everything the interpreter printed, with echoed commands
    pub transcript: Transcript,

    /// Line currently being typed
    pub input: String,

    /// Previously submitted lines, oldest first
    pub history: Vec<String>,

    /// Position while browsing history (None = editing a fresh line)
    pub history_index: Option<usize>,

    /// Transcript scroll offset; `usize::MAX` sticks to the bottom
    pub terminal_scroll: usize,

    /// Top-left visible canvas cell (row, column)
    pub canvas_scroll: (u16, u16),

    /// Number of non-blank lines submitted
    pub submitted: usize,

    /// Whether the last submission reported an error
    pub last_failed: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(interpreter: Interpreter) -> Self {
        App {
            interpreter,
            transcript: Transcript::new(),
            input: String::new(),
            history: Vec::new(),
            history_index: None,
            terminal_scroll: 0,
            canvas_scroll: (0, 0),
            submitted: 0,
            last_failed: false,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, input box, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        panes::render_canvas_pane(
            frame,
            columns[0],
            self.interpreter.canvas(),
            self.canvas_scroll,
        );
        panes::render_terminal_pane(
            frame,
            columns[1],
            &self.transcript,
            &mut self.terminal_scroll,
        );
        panes::render_input_pane(frame, main_chunks[1], &self.input);
        panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.submitted,
            self.last_failed,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) -> io::Result<()> {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.history_index = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit()?;
            }
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.canvas_scroll.0 = self.canvas_scroll.0.saturating_sub(1);
            }
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.canvas_scroll.0 = self.canvas_scroll.0.saturating_add(1);
            }
            KeyCode::Up => self.history_prev(),
            KeyCode::Down => self.history_next(),
            KeyCode::PageUp => {
                // Sticky-bottom offset is usize::MAX; clamp before scrolling up.
                self.terminal_scroll = self
                    .terminal_scroll
                    .min(self.transcript.len())
                    .saturating_sub(5);
            }
            KeyCode::PageDown => {
                self.terminal_scroll = self.terminal_scroll.saturating_add(5);
            }
            KeyCode::Left => {
                self.canvas_scroll.1 = self.canvas_scroll.1.saturating_sub(1);
            }
            KeyCode::Right => {
                self.canvas_scroll.1 = self.canvas_scroll.1.saturating_add(1);
            }
            _ => {}
        }
        Ok(())
    }

    /// Run the typed line through the interpreter
    pub fn submit(&mut self) -> io::Result<()> {
        let line = std::mem::take(&mut self.input);
        self.history_index = None;

        if line.trim().is_empty() {
            return Ok(());
        }

        self.transcript.echo(&line);
        self.history.push(line.clone());
        self.submitted += 1;

        let mark = self.transcript.total();
        let flow = submit_line(&mut self.interpreter, &line, &mut self.transcript)?;

        self.last_failed = self
            .transcript
            .since(mark)
            .iter()
            .any(|l| l.kind == LineKind::Error);
        self.status_message = if self.last_failed {
            format!("`{}` failed", line.trim())
        } else {
            format!("Ran `{}`", line.trim())
        };

        // Auto-scroll transcript to bottom
        self.terminal_scroll = usize::MAX;

        if flow == Flow::Stop {
            self.should_quit = true;
        }
        Ok(())
    }

    fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            Some(i) => i.saturating_sub(1),
            None => self.history.len() - 1,
        };
        self.history_index = Some(index);
        self.input = self.history[index].clone();
    }

    fn history_next(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                self.history_index = Some(i + 1);
                self.input = self.history[i + 1].clone();
            }
            Some(_) => {
                self.history_index = None;
                self.input.clear();
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(lines: &[&str]) -> App {
        let mut app = App::new(Interpreter::default());
        for line in lines {
            app.input = line.to_string();
            app.submit().unwrap();
        }
        app
    }

    #[test]
    fn test_submit_draws_and_records() {
        let app = app_with(&["GRID 5,5", "POINT 2,2"]);
        assert_eq!(app.interpreter.canvas().get(2, 2), Some('*'));
        assert_eq!(app.submitted, 2);
        assert_eq!(app.history, vec!["GRID 5,5", "POINT 2,2"]);
        assert!(!app.last_failed);
    }

    #[test]
    fn test_errors_mark_status() {
        let app = app_with(&["POINT 1,1"]);
        assert!(app.last_failed);
        let last = app.transcript.lines().last().unwrap();
        assert_eq!(last.text, "error: Grid isn't initialized");
        assert_eq!(last.kind, LineKind::Error);
    }

    #[test]
    fn test_end_quits() {
        let app = app_with(&["END"]);
        assert!(app.should_quit);
    }

    #[test]
    fn test_history_navigation() {
        let mut app = app_with(&["GRID 5,5", "CLEAR"]);
        app.history_prev();
        assert_eq!(app.input, "CLEAR");
        app.history_prev();
        assert_eq!(app.input, "GRID 5,5");
        app.history_prev();
        assert_eq!(app.input, "GRID 5,5");
        app.history_next();
        assert_eq!(app.input, "CLEAR");
        app.history_next();
        assert!(app.input.is_empty());
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key_event(KeyEvent::new(code, modifiers)).unwrap();
    }

    #[test]
    fn test_canvas_scrolls_both_ways() {
        let mut app = app_with(&["GRID 40,40", "CLEAR"]);

        press(&mut app, KeyCode::Down, KeyModifiers::SHIFT);
        press(&mut app, KeyCode::Down, KeyModifiers::SHIFT);
        press(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.canvas_scroll, (2, 1));

        press(&mut app, KeyCode::Up, KeyModifiers::SHIFT);
        press(&mut app, KeyCode::Left, KeyModifiers::NONE);
        press(&mut app, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.canvas_scroll, (1, 0));

        // Shifted arrows leave history alone; plain ones still browse it.
        assert!(app.input.is_empty());
        assert_eq!(app.history_index, None);
        press(&mut app, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.input, "CLEAR");
        assert_eq!(app.canvas_scroll, (1, 0));
    }

    #[test]
    fn test_last_failed_after_transcript_fills() {
        let mut app = app_with(&["GRID 3,3"]);
        for _ in 0..crate::session::transcript::MAX_LINES {
            app.input = "CLEAR".to_string();
            app.submit().unwrap();
        }
        assert!(!app.last_failed);

        app.input = "GRID 3,3".to_string();
        app.submit().unwrap();
        assert!(app.last_failed);
        assert_eq!(app.transcript.len(), crate::session::transcript::MAX_LINES);
    }
}
