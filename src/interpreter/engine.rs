// Dispatch engine for the drawing interpreter

use crate::canvas::{Canvas, CanvasError, Limits};
use crate::command::{Command, ParsedCommand};
use crate::interpreter::errors::CommandError;
use crate::interpreter::handlers;
use std::io::{self, Write};

/// What the driver should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Ready for the next command
    Continue,
    /// `END` was evaluated; no further commands are dispatched
    Stop,
}

/// Owns the canvas and the command currently loaded for evaluation
#[derive(Debug)]
pub struct Interpreter {
    /// The drawing surface
    canvas: Canvas,

    /// Most recently loaded command, replaced on every cycle
    current: Option<ParsedCommand>,

    /// Set once `END` has been evaluated
    stopped: bool,
}

impl Interpreter {
    pub fn new(limits: Limits) -> Self {
        Interpreter {
            canvas: Canvas::with_limits(limits),
            current: None,
            stopped: false,
        }
    }

    /// Load a command, replacing whatever was loaded before
    pub fn load(&mut self, command: ParsedCommand) {
        self.current = Some(command);
    }

    /// Evaluate the loaded command.
    ///
    /// Handler failures are written to `out` as `error: <message>` lines and never
    /// returned; the only error surfaced here is a failed write to `out`. Once `END`
    /// has run every later call is a no-op returning [`Flow::Stop`].
    pub fn eval<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<Flow> {
        if self.stopped {
            return Ok(Flow::Stop);
        }

        let Some(command) = self.current.take() else {
            return Ok(Flow::Continue);
        };

        tracing::debug!(name = %command.name, kind = ?command.kind, args = ?command.args, "dispatch");

        let result = self.dispatch(&command, out);
        self.current = Some(command);

        match result {
            Ok(flow) => Ok(flow),
            Err(DispatchError::Command(err)) => {
                if err.is_precondition() {
                    tracing::debug!(error = %err, "precondition failed");
                } else {
                    tracing::warn!(error = %err, "command rejected");
                }
                writeln!(out, "error: {}", err)?;
                Ok(Flow::Continue)
            }
            Err(DispatchError::Io(err)) => Err(err),
        }
    }

    /// Load and evaluate in one step
    pub fn execute<W: Write + ?Sized>(
        &mut self,
        command: ParsedCommand,
        out: &mut W,
    ) -> io::Result<Flow> {
        self.load(command);
        self.eval(out)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The command evaluated last, if any
    pub fn current(&self) -> Option<&ParsedCommand> {
        self.current.as_ref()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn dispatch<W: Write + ?Sized>(
        &mut self,
        command: &ParsedCommand,
        out: &mut W,
    ) -> Result<Flow, DispatchError> {
        let kind = command.kind;

        if kind.requires_grid() {
            self.canvas.require_initialized()?;
        }

        let args = command.args.as_slice();
        if args.len() < kind.arity() {
            return Err(CommandError::WrongArity {
                name: command.name.clone(),
                expected: kind.arity(),
                got: args.len(),
            }
            .into());
        }

        let canvas = &mut self.canvas;
        match kind {
            Command::Char => handlers::set_character(canvas, args)?,
            Command::Circle => handlers::circle(canvas, args)?,
            Command::Clear => handlers::clear(canvas)?,
            Command::Display => {
                let rendered = handlers::display(canvas)?;
                out.write_all(rendered.as_bytes())?;
            }
            Command::End => {
                self.stopped = true;
                return Ok(Flow::Stop);
            }
            Command::Grid => handlers::grid_init(canvas, args)?,
            Command::Invalid => {
                return Err(CommandError::UnrecognizedCommand {
                    name: command.name.clone(),
                }
                .into())
            }
            Command::Line => handlers::line(canvas, args)?,
            Command::Point => handlers::point(canvas, args)?,
            Command::Rectangle => handlers::rectangle(canvas, args)?,
        }

        Ok(Flow::Continue)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

/// Internal split between reportable failures and output failures
enum DispatchError {
    Command(CommandError),
    Io(io::Error),
}

impl From<CommandError> for DispatchError {
    fn from(err: CommandError) -> Self {
        DispatchError::Command(err)
    }
}

impl From<CanvasError> for DispatchError {
    fn from(err: CanvasError) -> Self {
        DispatchError::Command(err.into())
    }
}

impl From<io::Error> for DispatchError {
    fn from(err: io::Error) -> Self {
        DispatchError::Io(err)
    }
}
