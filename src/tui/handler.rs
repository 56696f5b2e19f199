//! Event handler for the TUI
//!
//! Routes keyboard events to the form, the table, or the active dialog,
//! depending on where focus is.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::SortField;

use super::app::{ActiveDialog, App, FocusedPanel};
use super::event::Event;
use super::views::form::FormField;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows terminals also deliver release events
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.focused_panel {
        FocusedPanel::Form => handle_form_key(app, key),
        FocusedPanel::Table => handle_table_key(app, key),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Any key dismisses the help overlay
            app.close_dialog();
        }
        ActiveDialog::ConfirmClear => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_clear(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys while the entry form has focus
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Tab => app.form.focus_next(),
        KeyCode::BackTab => app.form.focus_prev(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.focus_table(),

        // The category field cycles through the known categories
        KeyCode::Down if app.form.focused_field == FormField::Category => {
            app.form.cycle_suggestion(app.store.categories(), true);
        }
        KeyCode::Up if app.form.focused_field == FormField::Category => {
            app.form.cycle_suggestion(app.store.categories(), false);
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.focused_input_mut().insert(c);
        }
        KeyCode::Backspace => app.form.focused_input_mut().backspace(),
        KeyCode::Delete => app.form.focused_input_mut().delete(),
        KeyCode::Left => app.form.focused_input_mut().move_left(),
        KeyCode::Right => app.form.focused_input_mut().move_right(),
        KeyCode::Home => app.form.focused_input_mut().move_start(),
        KeyCode::End => app.form.focused_input_mut().move_end(),

        _ => {}
    }
    Ok(())
}

/// Handle keys while the expense table has focus
fn handle_table_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),

        // Help
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Theme
        KeyCode::Char('t') => app.toggle_theme(),

        // Back to the form
        KeyCode::Tab | KeyCode::Enter => app.focus_form(),

        // Selection
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // Deletion
        KeyCode::Char('x') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('C') => app.request_clear(),

        // Column sorts, each toggling its own direction
        KeyCode::Char('c') => app.sort(SortField::Category),
        KeyCode::Char('a') => app.sort(SortField::Amount),
        KeyCode::Char('d') => app.sort(SortField::Date),

        _ => {}
    }
    Ok(())
}
