//! Error types reported by command handlers
//!
//! This module defines [`CommandError`], covering every way a single command can fail.
//! None of them are fatal: the interpreter prints the message as `error: <message>`
//! and carries on with the next line.

use crate::canvas::CanvasError;
use thiserror::Error;

/// Why a command was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Canvas precondition failures (uninitialized, initialized twice, bad size)
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// Name not present in the command table
    #[error("Invalid command `{name}`")]
    UnrecognizedCommand { name: String },

    /// Fewer arguments than the handler reads
    #[error("`{name}` expects {expected} argument{}, got {got}", plural(.expected))]
    WrongArity {
        name: String,
        expected: usize,
        got: usize,
    },

    /// `CIRCLE` with a radius below zero
    #[error("Radius must not be negative, got {0}")]
    NegativeRadius(i32),

    /// `CHAR` with a code that is not a Unicode scalar value
    #[error("Invalid character code {0}")]
    InvalidCharacter(i32),
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

impl CommandError {
    /// Whether the failure is a canvas lifecycle precondition
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            CommandError::Canvas(CanvasError::NotInitialized | CanvasError::AlreadyInitialized)
        )
    }
}
