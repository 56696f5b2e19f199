//! Layout definitions for the TUI
//!
//! Defines the vertical stack of the main screen (header, entry form,
//! expense table, status bar) plus helpers for centering dialogs.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the main screen
pub struct AppLayout {
    /// Header banner
    pub header: Rect,
    /// "Add New Expense" form
    pub form: Rect,
    /// Expense table
    pub table: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(8), // Form (two rows of inputs)
                Constraint::Min(5),    // Table
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            form: chunks[1],
            table: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Layout for the entry form: two rows of two inputs each
pub struct FormLayout {
    /// Description input (row 1, left)
    pub description: Rect,
    /// Category input (row 1, right)
    pub category: Rect,
    /// Amount input (row 2, left)
    pub amount: Rect,
    /// Date input (row 2, right)
    pub date: Rect,
}

impl FormLayout {
    /// Calculate form layout from the form's inner area
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(area);

        let row1 = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let row2 = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        Self {
            description: row1[0],
            category: row1[1],
            amount: row2[0],
            date: row2[1],
        }
    }
}

/// Centered rectangle taking a percentage of the available area
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Centered rectangle with a fixed size, clamped to the available area
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::new(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.form.height, 8);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(
            layout.header.height + layout.form.height + layout.table.height
                + layout.status_bar.height,
            24
        );
    }

    #[test]
    fn test_centered_rect_fixed_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect_fixed(60, 20, area);
        assert_eq!(rect.width, 40);
        assert_eq!(rect.height, 10);
    }
}
