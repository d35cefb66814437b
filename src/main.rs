use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use timenotes::app::{logging, App, AppConfig};

const TICK: Duration = Duration::from_millis(250);

/// Leaves raw mode and the alternate screen on every exit path
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

fn setup_terminal() -> Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode().context("enabling raw mode")?;
    let guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| app.render(frame))?;

        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => app.handle_key_event(key),
            Event::Mouse(mouse) => app.handle_mouse_event(mouse),
            _ => {}
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;

    let _log_guard = match logging::init(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("timenotes: logging disabled: {e:#}");
            None
        }
    };
    logging::install_panic_hook();
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let mut app = App::new(config);
    let result = {
        let (mut terminal, _guard) = setup_terminal()?;
        run(&mut terminal, &mut app)
    };

    if let Err(e) = &result {
        warn!(error = %e, "exiting with error");
    }
    info!("exiting");
    result
}
