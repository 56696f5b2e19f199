//! Help dialog
//!
//! Shows the keyboard reference as a centered overlay.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;
use crate::tui::theme::Theme;

/// Render the help dialog
pub fn render(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(theme.label)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(theme.border_style(true))
        .style(Style::default().bg(theme.table_bg));

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme.label)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let key_line = |key: &'static str, description: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", key), Style::default().fg(theme.hint)),
            Span::styled(description, Style::default().fg(theme.table_fg)),
        ])
    };

    let lines = vec![
        section("Entry Form"),
        Line::from(""),
        key_line("Tab", "Next field"),
        key_line("Shift+Tab", "Previous field"),
        key_line("Enter", "Add the expense"),
        key_line("Up/Down", "Cycle known categories (category field)"),
        key_line("Esc", "Move to the table"),
        Line::from(""),
        section("Expense Table"),
        Line::from(""),
        key_line("j/k", "Move selection down/up"),
        key_line("c", "Sort by category (toggles direction)"),
        key_line("a", "Sort by amount (toggles direction)"),
        key_line("d", "Sort by date (toggles direction)"),
        key_line("x/Del", "Delete the selected expense"),
        key_line("C", "Clear all expenses"),
        key_line("Tab", "Back to the form"),
        key_line("t", "Toggle dark/light theme"),
        key_line("?", "Show/hide this help"),
        key_line("q", "Quit (saves the expense file)"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
