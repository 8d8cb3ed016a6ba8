// asciidraw: character canvas drawing interpreter

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use asciidraw::config::Config;
use asciidraw::interpreter::Interpreter;
use asciidraw::session::run_script;
use asciidraw::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    init_logging(&config);
    tracing::info!("Starting asciidraw version {}", env!("CARGO_PKG_VERSION"));

    let mut interpreter = Interpreter::new(config.limits());

    if config.tui {
        return run_tui(interpreter);
    }

    let mut stdout = io::stdout().lock();

    let submitted = match &config.script {
        Some(path) => {
            let file = match File::open(path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("Error: cannot open '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            };
            run_script(&mut interpreter, BufReader::new(file), &mut stdout, false)?
        }
        None => {
            let stdin = io::stdin();
            let prompt = config.show_prompt(stdin.is_terminal());
            run_script(&mut interpreter, stdin.lock(), &mut stdout, prompt)?
        }
    };

    tracing::info!(submitted, "session finished");
    Ok(())
}

/// Logs go to stderr so they never mix with `DISPLAY` output. The TUI owns the
/// screen, so there logging stays off unless `RUST_LOG` asks for it.
fn init_logging(config: &Config) {
    let filter = if config.tui && std::env::var_os("RUST_LOG").is_none() {
        EnvFilter::new("off")
    } else {
        EnvFilter::from_default_env().add_directive(config.log_level().into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn run_tui(interpreter: Interpreter) -> Result<(), Box<dyn std::error::Error>> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(interpreter);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
