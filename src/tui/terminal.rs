//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash,
//! and runs the main event loop. The expense file is written exactly
//! once, on the way out.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::paths::BachatPaths;
use crate::config::settings::Settings;
use crate::storage::save_expenses;
use crate::store::ExpenseStore;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application over a loaded store
///
/// Returns after the user quits; by then the expense file and the
/// settings have been written. A save fault propagates to the caller
/// after the terminal is restored, so it prints cleanly.
pub fn run_tui(
    store: &mut ExpenseStore,
    settings: &mut Settings,
    paths: &BachatPaths,
) -> Result<()> {
    // Initialize terminal
    let mut terminal = init_terminal()?;

    // Create event handler and app state
    let events = EventHandler::default();
    let mut app = App::new(store, settings.theme);

    // Main event loop
    loop {
        // Render
        terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        })?;

        // Handle events
        match events.next()? {
            event @ Event::Key(_) => handle_event(&mut app, event)?,
            Event::Resize(_, _) => {
                // Terminal will redraw on the next pass
            }
            Event::Tick => {}
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    let theme = app.theme.kind;
    drop(app);

    // Restore terminal
    restore_terminal()?;

    // Shutdown persistence: the expense file first, then the settings
    paths.ensure_directories()?;
    save_expenses(store.records(), paths.expense_file())?;
    settings.theme = theme;
    settings.save(paths)?;

    Ok(())
}
