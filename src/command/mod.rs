//! Command model: the closed set of command kinds and the parsed form the
//! interpreter consumes.
//!
//! Name resolution is a total function. Any name missing from the table maps to
//! [`Command::Invalid`] instead of failing, and the interpreter reports it when
//! the command is evaluated.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Maximum number of arguments a command line can carry
pub const ARGS_MAX: usize = 4;

/// Every command the interpreter can evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Char,
    Circle,
    Clear,
    Display,
    End,
    Grid,
    Invalid,
    Line,
    Point,
    Rectangle,
}

/// Name → kind table, built once on first lookup
static COMMAND_TABLE: LazyLock<FxHashMap<&'static str, Command>> = LazyLock::new(|| {
    Command::ALL
        .iter()
        .filter_map(|&cmd| cmd.name().map(|name| (name, cmd)))
        .collect()
});

impl Command {
    /// All kinds, including [`Command::Invalid`]
    pub const ALL: [Command; 10] = [
        Command::Char,
        Command::Circle,
        Command::Clear,
        Command::Display,
        Command::End,
        Command::Grid,
        Command::Invalid,
        Command::Line,
        Command::Point,
        Command::Rectangle,
    ];

    /// Resolve a command token. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Command {
        COMMAND_TABLE
            .get(name)
            .copied()
            .unwrap_or(Command::Invalid)
    }

    /// The token that selects this kind; `None` for [`Command::Invalid`]
    pub fn name(self) -> Option<&'static str> {
        match self {
            Command::Char => Some("CHAR"),
            Command::Circle => Some("CIRCLE"),
            Command::Clear => Some("CLEAR"),
            Command::Display => Some("DISPLAY"),
            Command::End => Some("END"),
            Command::Grid => Some("GRID"),
            Command::Invalid => None,
            Command::Line => Some("LINE"),
            Command::Point => Some("POINT"),
            Command::Rectangle => Some("RECTANGLE"),
        }
    }

    /// Number of arguments the handler for this kind reads
    pub fn arity(self) -> usize {
        match self {
            Command::Char => 1,
            Command::Circle => 3,
            Command::Grid | Command::Point => 2,
            Command::Line | Command::Rectangle => 4,
            Command::Clear | Command::Display | Command::End | Command::Invalid => 0,
        }
    }

    /// Whether the kind needs an initialized grid before it may run
    pub fn requires_grid(self) -> bool {
        matches!(
            self,
            Command::Circle
                | Command::Clear
                | Command::Display
                | Command::Line
                | Command::Point
                | Command::Rectangle
        )
    }

    /// Short usage string, shown by the TUI help line
    pub fn usage(self) -> &'static str {
        match self {
            Command::Char => "CHAR c",
            Command::Circle => "CIRCLE x,y,radius",
            Command::Clear => "CLEAR",
            Command::Display => "DISPLAY",
            Command::End => "END",
            Command::Grid => "GRID width,height",
            Command::Invalid => "",
            Command::Line => "LINE x1,y1,x2,y2",
            Command::Point => "POINT x,y",
            Command::Rectangle => "RECTANGLE x1,y1,x2,y2",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("INVALID"))
    }
}

/// One tokenized input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The command token exactly as typed, used in error messages
    pub name: String,
    pub kind: Command,
    /// Up to [`ARGS_MAX`] integers; characters are stored as their code point
    pub args: Vec<i32>,
}

impl ParsedCommand {
    /// Build a command, resolving `name` through the command table
    pub fn new(name: impl Into<String>, args: Vec<i32>) -> Self {
        let name = name.into();
        let kind = Command::from_name(&name);
        ParsedCommand { name, kind, args }
    }
}
