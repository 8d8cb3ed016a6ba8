//! Drivers that feed input lines into the interpreter
//!
//! - [`run_script`]: the read–parse–evaluate loop used for stdin and script files
//! - [`transcript`]: captured output lines for the TUI
//!
//! Both drivers go through [`submit_line`], so a line behaves the same whether it was
//! piped in, read from a file, or typed into the TUI.

pub mod transcript;

use crate::interpreter::{Flow, Interpreter};
use crate::parser::parse_line;
use std::io::{self, BufRead, Write};

pub use transcript::Transcript;

/// Prompt printed before each line in interactive mode
pub const PROMPT: &str = "> ";

/// Parse one line and evaluate it.
///
/// Parse errors are reported like handler errors, as `error: <message>`; blank lines
/// are skipped.
pub fn submit_line<W: Write + ?Sized>(
    interpreter: &mut Interpreter,
    line: &str,
    out: &mut W,
) -> io::Result<Flow> {
    match parse_line(line) {
        Ok(Some(command)) => interpreter.execute(command, out),
        Ok(None) => Ok(Flow::Continue),
        Err(err) => {
            tracing::warn!(error = %err, line, "unparsable line");
            writeln!(out, "error: {}", err)?;
            Ok(Flow::Continue)
        }
    }
}

/// Run lines from `input` until `END` or end of input.
///
/// Returns the number of non-blank lines that were submitted.
pub fn run_script<R, W>(
    interpreter: &mut Interpreter,
    input: R,
    out: &mut W,
    prompt: bool,
) -> io::Result<usize>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let mut submitted = 0;
    let mut lines = input.lines();

    loop {
        if prompt {
            out.write_all(PROMPT.as_bytes())?;
            out.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            tracing::debug!(submitted, "end of input");
            break;
        };

        if !line.trim().is_empty() {
            submitted += 1;
        }

        if submit_line(interpreter, &line, out)? == Flow::Stop {
            tracing::debug!(submitted, "session ended by END");
            break;
        }
        out.flush()?;
    }

    if prompt {
        // Leave the terminal on a fresh line after the last prompt.
        out.write_all(b"\n")?;
    }
    out.flush()?;

    Ok(submitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str, prompt: bool) -> (usize, String, Interpreter) {
        let mut interp = Interpreter::default();
        let mut out = Vec::new();
        let n = run_script(&mut interp, Cursor::new(script), &mut out, prompt).unwrap();
        (n, String::from_utf8(out).unwrap(), interp)
    }

    #[test]
    fn test_stops_at_end() {
        let (n, _, interp) = run("GRID 3,3\nEND\nPOINT 1,1\n", false);
        assert_eq!(n, 2);
        assert_eq!(interp.canvas().filled_cells(), 0);
    }

    #[test]
    fn test_stops_at_eof_and_skips_blank_lines() {
        let (n, out, interp) = run("GRID 3,3\n\n   \nPOINT 1,1", false);
        assert_eq!(n, 2);
        assert!(out.is_empty());
        assert_eq!(interp.canvas().get(1, 1), Some('*'));
    }

    #[test]
    fn test_parse_errors_are_reported() {
        let (_, out, _) = run("POINT xyz,1\n", false);
        assert_eq!(out, "error: Invalid argument `xyz`\n");
    }

    #[test]
    fn test_prompt_is_written_per_line() {
        let (_, out, _) = run("GRID 2,2\nEND\n", true);
        assert_eq!(out, "> > \n");
    }
}
