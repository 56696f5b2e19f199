//! Expense entry form
//!
//! The "Add New Expense" section: four labeled inputs in two rows
//! (description/category, amount/date), with Tab cycling and category
//! suggestions drawn from the store.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::models::Expense;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::FormLayout;
use crate::tui::widgets::input::{InputView, TextInput};

/// Which field is currently focused in the entry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Description,
    Category,
    Amount,
    Date,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Date,
            Self::Category => Self::Description,
            Self::Amount => Self::Category,
            Self::Date => Self::Amount,
        }
    }
}

/// State for the entry form
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    pub description: TextInput,
    pub category: TextInput,
    pub amount: TextInput,
    pub date: TextInput,
    pub focused_field: FormField,
    /// Position in the category suggestion cycle
    suggestion: Option<usize>,
}

impl ExpenseForm {
    /// Create an empty form with the date pre-filled with today
    pub fn new() -> Self {
        Self {
            description: TextInput::new(),
            category: TextInput::new(),
            amount: TextInput::new(),
            date: TextInput::with_content(Local::now().date_naive().to_string()),
            focused_field: FormField::Description,
            suggestion: None,
        }
    }

    /// The input belonging to the focused field
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            FormField::Description => &mut self.description,
            FormField::Category => &mut self.category,
            FormField::Amount => &mut self.amount,
            FormField::Date => &mut self.date,
        }
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Build an expense record from the current field contents
    pub fn to_expense(&self) -> Expense {
        Expense::new(
            self.description.value(),
            self.category.value(),
            self.amount.value(),
            self.date.value(),
        )
    }

    /// Reset the text fields after a successful submit
    ///
    /// The date keeps its value so several expenses from the same day can
    /// be entered in a row.
    pub fn clear_after_submit(&mut self) {
        self.description.clear();
        self.category.clear();
        self.amount.clear();
        self.suggestion = None;
        self.focused_field = FormField::Description;
    }

    /// Fill the category field with the next (or previous) known category
    pub fn cycle_suggestion(&mut self, categories: &[String], forward: bool) {
        if categories.is_empty() {
            return;
        }
        let next = match self.suggestion {
            None => {
                if forward {
                    0
                } else {
                    categories.len() - 1
                }
            }
            Some(current) => {
                if forward {
                    (current + 1) % categories.len()
                } else {
                    (current + categories.len() - 1) % categories.len()
                }
            }
        };
        self.suggestion = Some(next);
        self.category.set(categories[next].clone());
    }
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the entry form
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let form_focused = app.focused_panel == FocusedPanel::Form;

    let block = Block::default()
        .title(" Add New Expense ")
        .title_style(Style::default().fg(app.theme.label))
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(form_focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = FormLayout::new(inner);
    let fields = [
        (&app.form.description, "Description", FormField::Description, layout.description),
        (&app.form.category, "Category", FormField::Category, layout.category),
        (&app.form.amount, "Amount", FormField::Amount, layout.amount),
        (&app.form.date, "Date", FormField::Date, layout.date),
    ];

    for (input, label, field, field_area) in fields {
        let focused = form_focused && app.form.focused_field == field;
        frame.render_widget(InputView::new(input, label, focused, &app.theme), field_area);
    }
}
