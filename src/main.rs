use std::io;
use std::process::ExitCode;
use std::time::Duration;

use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};

use jotter::app::App;
use jotter::config::{self, Config};
use jotter::error::VaultError;
use jotter::terminal::TerminalGuard;
use jotter::{handlers, logging, ui};

const TICK: Duration = Duration::from_millis(250);

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Vault(#[from] VaultError),
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Ignoring config at {}: {e}",
                config::get_config_path().display()
            );
            Config::default()
        }
    };

    if let Err(e) = logging::init(&config.log_path()) {
        eprintln!("Logging disabled: {e}");
    }

    let app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(app: App) -> Result<(), RunError> {
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, app)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<(), RunError> {
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        terminal.draw(|f| ui::render_app(f, &app))?;

        if event::poll(TICK)? {
            handlers::handle_event(&mut app, event::read()?)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
