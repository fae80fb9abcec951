use self::app::{App, Mode};
use crate::{storage::config_manager::ConfigManager, theme::Theme};
use anyhow::Result;
use crossterm::{
    event::{self, poll, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

pub mod app;
pub mod filter;
pub mod form;
pub mod hits;
mod key_hints;
pub mod modal;
pub mod nav;
pub mod timers;
pub mod tooltip;
mod ui;
pub mod viewport;
pub mod widgets;

/// # Errors
/// Returns an error if something goes wrong during the TUI setup, execution, or teardown.
pub fn run(config_manager: &ConfigManager<'_>, theme: Theme) -> Result<()> {
    let mut app = App::new(theme).with_config(config_manager);

    let mut terminal = setup_terminal()?;
    let result = run_main_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    result
}

/// # Errors
/// Returns an error if something goes wrong during the TUI setup.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// # Errors
/// Returns an error if something goes wrong during the TUI teardown.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// # Errors
/// Returns an error if something goes wrong during the TUI execution.
fn run_main_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<'_>,
) -> Result<()> {
    let started = Instant::now();
    loop {
        // render
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // process input
        if poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    app.handle_key(key);
                    if app.mode == Mode::Exiting {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        // advance animations and fire due timers
        let now_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        app.tick(now_ms);
    }
}
