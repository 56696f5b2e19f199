//! Confirmation dialog
//!
//! Simple yes/no confirmation, used before clearing all expenses.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;
use crate::tui::theme::Theme;

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, message: &str, theme: &Theme) {
    let area = centered_rect_fixed(54, 7, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(theme.label)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(theme.border_style(true))
        .style(Style::default().bg(theme.table_bg));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(theme.table_fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::styled(" Yes  ", Style::default().fg(theme.table_fg)),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::styled(" No  ", Style::default().fg(theme.table_fg)),
            Span::styled("[Esc]", Style::default().fg(theme.hint)),
            Span::styled(" Cancel", Style::default().fg(theme.table_fg)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .centered();

    frame.render_widget(paragraph, area);
}
