//! Tokenizer for command lines
//!
//! The grammar is flat: a command token followed by up to [`ARGS_MAX`] arguments.
//! There is no nesting and no quoting, so a single pass over whitespace and commas
//! is all that is needed.

use crate::command::{ParsedCommand, ARGS_MAX};
use thiserror::Error;

/// Errors produced while tokenizing a line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A piece that is neither an integer nor a single character
    #[error("Invalid argument `{0}`")]
    InvalidArgument(String),

    /// A decimal piece that does not fit a 32-bit integer
    #[error("Argument `{0}` is out of range")]
    IntegerOutOfRange(String),

    /// More than `ARGS_MAX` arguments
    #[error("Too many arguments: at most {max} allowed, got {got}")]
    TooManyArguments { max: usize, got: usize },
}

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line. The line terminator, if present, is ignored.
pub fn parse_line(line: &str) -> Result<Option<ParsedCommand>, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let mut tokens = line.split_whitespace();

    let Some(name) = tokens.next() else {
        return Ok(None);
    };

    let mut args = Vec::with_capacity(ARGS_MAX);
    for piece in tokens.flat_map(|token| token.split(',')) {
        if piece.is_empty() {
            continue;
        }
        args.push(parse_argument(piece)?);
    }

    if args.len() > ARGS_MAX {
        return Err(ParseError::TooManyArguments {
            max: ARGS_MAX,
            got: args.len(),
        });
    }

    Ok(Some(ParsedCommand::new(name, args)))
}

/// Parse a single comma-separated piece
fn parse_argument(piece: &str) -> Result<i32, ParseError> {
    if looks_numeric(piece) {
        return piece.parse::<i32>().map_err(|_| {
            if piece.trim_start_matches('-').bytes().all(|b| b.is_ascii_digit()) {
                ParseError::IntegerOutOfRange(piece.to_string())
            } else {
                ParseError::InvalidArgument(piece.to_string())
            }
        });
    }

    let mut chars = piece.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c as i32),
        _ => Err(ParseError::InvalidArgument(piece.to_string())),
    }
}

/// A leading digit, or a minus sign followed by one
fn looks_numeric(piece: &str) -> bool {
    let digits = piece.strip_prefix('-').unwrap_or(piece);
    digits.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    fn parse(line: &str) -> ParsedCommand {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t "), Ok(None));
        assert_eq!(parse_line("\r\n"), Ok(None));
    }

    #[test]
    fn test_command_without_arguments() {
        let cmd = parse("DISPLAY\n");
        assert_eq!(cmd.kind, Command::Display);
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_comma_groups() {
        let cmd = parse("LINE 0,0,10,5");
        assert_eq!(cmd.kind, Command::Line);
        assert_eq!(cmd.args, vec![0, 0, 10, 5]);
    }

    #[test]
    fn test_whitespace_and_commas_mix() {
        assert_eq!(parse("RECTANGLE 1,2 3,4").args, vec![1, 2, 3, 4]);
        assert_eq!(parse("GRID  20   10").args, vec![20, 10]);
        assert_eq!(parse("POINT 3,,4").args, vec![3, 4]);
    }

    #[test]
    fn test_character_argument() {
        let cmd = parse("CHAR #");
        assert_eq!(cmd.kind, Command::Char);
        assert_eq!(cmd.args, vec!['#' as i32]);

        assert_eq!(parse("CHAR -").args, vec!['-' as i32]);
        assert_eq!(parse("CHAR é").args, vec!['é' as i32]);
    }

    #[test]
    fn test_negative_integers() {
        assert_eq!(parse("CIRCLE -3,4,2").args, vec![-3, 4, 2]);
    }

    #[test]
    fn test_unknown_command_keeps_name() {
        let cmd = parse("FOO 1");
        assert_eq!(cmd.kind, Command::Invalid);
        assert_eq!(cmd.name, "FOO");
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            parse_line("POINT ab,3"),
            Err(ParseError::InvalidArgument("ab".to_string()))
        );
        assert_eq!(
            parse_line("POINT 12x,3"),
            Err(ParseError::InvalidArgument("12x".to_string()))
        );
        assert_eq!(
            parse_line("POINT 99999999999,3"),
            Err(ParseError::IntegerOutOfRange("99999999999".to_string()))
        );
    }

    #[test]
    fn test_too_many_arguments() {
        assert_eq!(
            parse_line("LINE 1,2,3,4,5"),
            Err(ParseError::TooManyArguments { max: 4, got: 5 })
        );
    }
}
