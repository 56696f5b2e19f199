//! Status bar view
//!
//! One line at the bottom: the transient status message on the left, key
//! hints for the focused panel on the right.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, FocusedPanel, StatusKind};
use crate::tui::views::form::FormField;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    if let Some(ref status) = app.status {
        let color = match status.kind {
            StatusKind::Info => app.theme.hint,
            StatusKind::Success => Color::Green,
            StatusKind::Error => Color::Red,
        };
        spans.push(Span::styled(
            status.text.clone(),
            Style::default().fg(color),
        ));
    }

    // Key hints for the focused panel (right-aligned)
    let hints = match app.focused_panel {
        FocusedPanel::Form => {
            if app.form.focused_field == FormField::Category && !app.store.categories().is_empty()
            {
                " Up/Down:Categories  Tab:Next field  Enter:Add  Esc:Table "
            } else {
                " Tab:Next field  Enter:Add  Esc:Table "
            }
        }
        FocusedPanel::Table => {
            " Tab:Form  c/a/d:Sort  x:Delete  C:Clear all  t:Theme  ?:Help  q:Quit "
        }
    };

    let left_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len + hints.len())
        .max(1);
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(hints, Style::default().fg(app.theme.hint)));

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.background));

    frame.render_widget(paragraph, area);
}
