//! Command-line configuration

use crate::canvas::grid::DEFAULT_MAX_DIMENSION;
use crate::canvas::Limits;
use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Draw points, lines, circles and rectangles on a character canvas
#[derive(Debug, Clone, Parser)]
#[command(name = "asciidraw", version, about)]
pub struct Config {
    /// Script to run instead of reading commands from stdin
    pub script: Option<PathBuf>,

    /// Open the full-screen canvas view
    #[arg(long, conflicts_with = "script")]
    pub tui: bool,

    /// Never print the `> ` prompt, even on a terminal
    #[arg(long)]
    pub no_prompt: bool,

    /// Largest width or height `GRID` accepts
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DIMENSION,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub max_size: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn limits(&self) -> Limits {
        Limits {
            max_dimension: self.max_size,
        }
    }

    /// Log level implied by the `-v` count
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Whether the prompt should be shown for input that is (or is not) a terminal
    pub fn show_prompt(&self, stdin_is_terminal: bool) -> bool {
        !self.no_prompt && self.script.is_none() && stdin_is_terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["asciidraw"]).unwrap();
        assert!(config.script.is_none());
        assert!(!config.tui);
        assert_eq!(config.limits(), Limits::default());
        assert_eq!(config.log_level(), tracing::Level::WARN);
        assert!(config.show_prompt(true));
        assert!(!config.show_prompt(false));
    }

    #[test]
    fn test_flags() {
        let config =
            Config::try_parse_from(["asciidraw", "--max-size", "64", "-vv", "--no-prompt"])
                .unwrap();
        assert_eq!(config.limits().max_dimension, 64);
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
        assert!(!config.show_prompt(true));
    }

    #[test]
    fn test_script_disables_prompt() {
        let config = Config::try_parse_from(["asciidraw", "drawing.txt"]).unwrap();
        assert_eq!(config.script, Some(PathBuf::from("drawing.txt")));
        assert!(!config.show_prompt(true));
    }

    #[test]
    fn test_rejects_zero_max_size_and_tui_with_script() {
        assert!(Config::try_parse_from(["asciidraw", "--max-size", "0"]).is_err());
        assert!(Config::try_parse_from(["asciidraw", "--tui", "x.txt"]).is_err());
    }
}
