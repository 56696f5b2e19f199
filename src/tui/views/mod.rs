//! TUI views module
//!
//! Contains the main screen's renderers: header banner, entry form,
//! expense table, and status bar, plus dialog dispatch.

pub mod form;
pub mod status_bar;
pub mod table;

use ratatui::{
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    // Paint the themed background before anything else
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        frame.area(),
    );

    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);
    form::render(frame, app, layout.form);
    table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => dialogs::help::render(frame, &app.theme),
        ActiveDialog::ConfirmClear => dialogs::confirm::render(
            frame,
            "Are you sure you want to clear all expenses?",
            &app.theme,
        ),
    }
}

/// Render the header banner
fn render_header(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let banner = Paragraph::new("BachatBuddy")
        .style(app.theme.header_style())
        .centered();
    frame.render_widget(banner, area);
}
