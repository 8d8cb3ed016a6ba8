//! Input line parser
//!
//! Turns one line of text into a [`ParsedCommand`](crate::command::ParsedCommand):
//! - [`lexer`]: splits the line into the command token and its argument pieces
//!
//! # Argument syntax
//!
//! Arguments are separated by whitespace at the top level and by commas inside a
//! group, so `LINE 0,0 10,5` and `LINE 0,0,10,5` are the same command. A piece that
//! starts with a digit (or `-` and a digit) is a decimal integer; any other single
//! character stands for its code point, which is how `CHAR #` passes `35`.

pub mod lexer;

pub use lexer::{parse_line, ParseError};
