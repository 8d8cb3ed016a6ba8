//! TUI pane rendering modules
//!
//! Each pane module exports one stateless `render_*` function:
//!
//! - [`canvas`]: the grid with ruler digits, styled like `DISPLAY` output
//! - [`terminal`]: the transcript of submitted commands, output and errors
//! - [`input`]: the command line being edited
//! - [`status`]: status bar with keybindings

pub mod canvas;
pub mod input;
pub mod status;
pub mod terminal;

pub use canvas::render_canvas_pane;
pub use input::render_input_pane;
pub use status::render_status_bar;
pub use terminal::render_terminal_pane;
