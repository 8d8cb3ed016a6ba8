//! # Introduction
//!
//! asciidraw reads drawing commands one line at a time and rasterizes points, lines,
//! circles and rectangles onto a fixed-size character canvas, which `DISPLAY` prints
//! as text.
//!
//! ## Execution pipeline
//!
//! ```text
//! Line → Parser → ParsedCommand → Interpreter → Canvas → DISPLAY text
//! ```
//!
//! 1. [`parser`] — splits a line into a command token and integer arguments.
//! 2. [`command`] — the closed set of command kinds and the name lookup table.
//! 3. [`interpreter`] — owns the [`canvas::Canvas`], checks preconditions and arity,
//!    and dispatches each command to its handler.
//! 4. [`canvas`] — the character grid, bounds-checked plotting and the line/circle
//!    rasterizers.
//! 5. [`session`] — the read–evaluate loop and the output transcript.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Commands
//!
//! `GRID w,h`, `CHAR c`, `POINT x,y`, `LINE x1,y1,x2,y2`, `CIRCLE x,y,r`,
//! `RECTANGLE x1,y1,x2,y2`, `CLEAR`, `DISPLAY`, `END`.
//!
//! ```
//! use asciidraw::interpreter::Interpreter;
//! use asciidraw::session::run_script;
//!
//! let mut interpreter = Interpreter::default();
//! let mut out = Vec::new();
//! run_script(&mut interpreter, "GRID 3,2\nPOINT 1,0\nDISPLAY\n".as_bytes(), &mut out, false)
//!     .unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "9  * \n8    \n 987\n");
//! ```

pub mod canvas;
pub mod command;
pub mod config;
pub mod interpreter;
pub mod parser;
pub mod session;
pub mod ui;
