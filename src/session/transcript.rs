// Captured interpreter output for the TUI

use std::io::{self, Write};

/// Lines kept before the oldest ones are dropped
pub const MAX_LINES: usize = 5000;

/// Output written by the interpreter, split into lines.
///
/// Implements [`Write`] so it can be handed straight to
/// [`Interpreter::eval`](crate::interpreter::Interpreter::eval). Submitted commands are
/// echoed with [`Transcript::echo`] so the pane reads like a terminal session.
/// Only the newest [`MAX_LINES`] lines are retained.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<TranscriptLine>,
    partial: String,
    /// Lines ever pushed, including dropped ones
    total: usize,
}

/// One finished line of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub text: String,
    pub kind: LineKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A command the user submitted
    Input,
    /// Normal output such as a `DISPLAY` rendering
    Output,
    /// An `error: ...` report
    Error,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command line
    pub fn echo(&mut self, line: &str) {
        self.flush_partial();
        self.push(TranscriptLine {
            text: format!("> {}", line),
            kind: LineKind::Input,
        });
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines pushed so far, dropped ones included. Use it as a mark for
    /// [`Transcript::since`].
    pub fn total(&self) -> usize {
        self.total
    }

    /// Retained lines pushed after `total()` returned `mark`
    pub fn since(&self, mark: usize) -> &[TranscriptLine] {
        let added = self.total.saturating_sub(mark).min(self.lines.len());
        &self.lines[self.lines.len() - added..]
    }

    fn push(&mut self, line: TranscriptLine) {
        self.lines.push(line);
        self.total += 1;
        if self.lines.len() > MAX_LINES {
            let excess = self.lines.len() - MAX_LINES;
            self.lines.drain(..excess);
        }
    }

    fn push_output(&mut self, text: String) {
        let kind = if text.starts_with("error: ") {
            LineKind::Error
        } else {
            LineKind::Output
        };
        self.push(TranscriptLine { text, kind });
    }

    fn flush_partial(&mut self) {
        if !self.partial.is_empty() {
            let text = std::mem::take(&mut self.partial);
            self.push_output(text);
        }
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        for c in text.chars() {
            if c == '\n' {
                let line = std::mem::take(&mut self.partial);
                self.push_output(line);
            } else {
                self.partial.push(c);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_lines_and_classifies() {
        let mut t = Transcript::new();
        t.echo("DISPLAY");
        write!(t, "9 *\n 9\n").unwrap();
        writeln!(t, "error: Grid isn't initialized").unwrap();

        let kinds: Vec<LineKind> = t.lines().iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Input,
                LineKind::Output,
                LineKind::Output,
                LineKind::Error
            ]
        );
        assert_eq!(t.lines()[0].text, "> DISPLAY");
        assert_eq!(t.lines()[2].text, " 9");
    }

    #[test]
    fn test_partial_line_is_kept_until_echo() {
        let mut t = Transcript::new();
        write!(t, "abc").unwrap();
        assert!(t.is_empty());
        t.echo("END");
        assert_eq!(t.len(), 2);
        assert_eq!(t.lines()[0].text, "abc");
    }

    #[test]
    fn test_oldest_lines_are_dropped() {
        let mut t = Transcript::new();
        for i in 0..MAX_LINES + 10 {
            writeln!(t, "line {i}").unwrap();
        }

        assert_eq!(t.len(), MAX_LINES);
        assert_eq!(t.total(), MAX_LINES + 10);
        assert_eq!(t.lines()[0].text, "line 10");
        assert_eq!(
            t.lines().last().unwrap().text,
            format!("line {}", MAX_LINES + 9)
        );
    }

    #[test]
    fn test_since_mark_survives_trimming() {
        let mut t = Transcript::new();
        for _ in 0..MAX_LINES {
            writeln!(t, "filler").unwrap();
        }

        let mark = t.total();
        t.echo("POINT 1,1");
        writeln!(t, "error: Grid isn't initialized").unwrap();

        let recent = t.since(mark);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].kind, LineKind::Input);
        assert_eq!(recent[1].kind, LineKind::Error);
        assert_eq!(t.len(), MAX_LINES);

        assert!(t.since(t.total()).is_empty());
    }
}
