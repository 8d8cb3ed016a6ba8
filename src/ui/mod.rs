//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, input editing and history
//! - **[`panes`]** — stateless render functions for each visible pane (canvas,
//!   output transcript, input line, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an [`Interpreter`] and
//! call [`App::run`] to start the event loop. Lines typed into the input box go through
//! the same parser and interpreter as piped input.
//!
//! [`Interpreter`]: crate::interpreter::Interpreter
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
