//! Command interpreter
//!
//! This module ties parsed commands to canvas mutations:
//! - [`engine`]: the [`Interpreter`](engine::Interpreter) that owns the canvas and dispatches
//! - [`handlers`]: one function per command kind
//! - [`errors`]: the [`CommandError`](errors::CommandError) taxonomy
//!
//! # Execution Model
//!
//! A driver loads one command at a time and evaluates it to completion. Dispatch itself
//! never fails: every kind, including unrecognized names, maps to exactly one handler,
//! and handler failures are reported as `error: <message>` lines on the output stream.
//! The initialization check for drawing commands lives in the dispatcher, ahead of the
//! arity check, so no handler runs against a missing grid.

pub mod engine;
pub mod errors;
pub mod handlers;

pub use engine::{Flow, Interpreter};
pub use errors::CommandError;
