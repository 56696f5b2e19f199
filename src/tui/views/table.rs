//! Expense table view
//!
//! Shows all stored expenses with the same four columns as the entry
//! form. Sorting happens in the store; this view just renders whatever
//! order the store holds.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

/// Render the expense table
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Table;

    let block = Block::default()
        .title(format!(" Expenses ({}) ", app.store.len()))
        .title_style(Style::default().fg(app.theme.label))
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(is_focused))
        .style(Style::default().bg(app.theme.table_bg));

    if app.store.is_empty() {
        let text = Paragraph::new("No expenses. Fill in the form and press Enter to add one.")
            .block(block)
            .style(Style::default().fg(app.theme.hint).bg(app.theme.table_bg));
        frame.render_widget(text, area);
        return;
    }

    // Description gets the widest column; the rest share the remainder
    // evenly.
    let widths = [
        Constraint::Percentage(35),
        Constraint::Percentage(22),
        Constraint::Percentage(22),
        Constraint::Percentage(21),
    ];

    let header_style = Style::default()
        .fg(app.theme.table_fg)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Description"),
        Cell::from("Category"),
        Cell::from("Amount"),
        Cell::from("Date"),
    ])
    .style(header_style)
    .height(1);

    let row_style = Style::default().fg(app.theme.table_fg).bg(app.theme.table_bg);
    let rows: Vec<Row> = app
        .store
        .records()
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(expense.description.clone()),
                Cell::from(expense.category.clone()),
                Cell::from(expense.amount.clone()),
                Cell::from(expense.date.clone()),
            ])
            .style(row_style)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(app.theme.selection_bg)
                .fg(app.theme.selection_fg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default();
    state.select(app.selected);

    frame.render_stateful_widget(table, area, &mut state);
}
