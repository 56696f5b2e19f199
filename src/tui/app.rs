//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling
//! events. Record state stays in the expense store; the App only adds
//! view concerns: focus, selection, the entry form, the active dialog,
//! the theme, and the transient status message.

use crate::config::settings::ThemeKind;
use crate::error::BachatError;
use crate::models::SortField;
use crate::store::ExpenseStore;

use super::theme::Theme;
use super::views::form::ExpenseForm;

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    /// The entry form (initial focus)
    #[default]
    Form,
    /// The expense table
    Table,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Keyboard reference overlay
    Help,
    /// "Clear all expenses?" confirmation
    ConfirmClear,
}

/// Kind of transient status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// A transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Main application state
pub struct App<'a> {
    /// The authoritative record store
    pub store: &'a mut ExpenseStore,

    /// Active theme
    pub theme: Theme,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// The entry form state
    pub form: ExpenseForm,

    /// Selected row in the table, if any
    pub selected: Option<usize>,

    /// Status message to display
    pub status: Option<StatusMessage>,
}

impl<'a> App<'a> {
    /// Create the app state over a loaded store
    pub fn new(store: &'a mut ExpenseStore, theme: ThemeKind) -> Self {
        let selected = if store.is_empty() { None } else { Some(0) };
        Self {
            store,
            theme: Theme::for_kind(theme),
            should_quit: false,
            focused_panel: FocusedPanel::Form,
            active_dialog: ActiveDialog::None,
            form: ExpenseForm::new(),
            selected,
            status: None,
        }
    }

    /// Signal the main loop to exit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Show an informational status message
    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Info,
        });
    }

    /// Show a success status message
    pub fn set_success(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Success,
        });
    }

    /// Show an error status message
    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Error,
        });
    }

    /// Submit the entry form
    ///
    /// On success the text fields are cleared (the date keeps its value)
    /// and the new row becomes the selection. A validation failure leaves
    /// the form and the store untouched and surfaces the message in the
    /// status bar.
    pub fn submit_form(&mut self) {
        let expense = self.form.to_expense();
        let description = expense.description.clone();
        match self.store.append(expense) {
            Ok(()) => {
                self.form.clear_after_submit();
                self.selected = Some(self.store.len() - 1);
                self.set_success(format!("Added \"{}\"", description));
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    /// Delete the selected expense
    pub fn delete_selected(&mut self) {
        let Some(index) = self.selected else {
            self.set_error(BachatError::NoSelection.to_string());
            return;
        };
        match self.store.delete_at(index) {
            Ok(removed) => {
                self.selected = if self.store.is_empty() {
                    None
                } else {
                    Some(index.min(self.store.len() - 1))
                };
                self.set_success(format!("Deleted \"{}\"", removed.description));
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    /// Ask for confirmation before clearing all expenses
    pub fn request_clear(&mut self) {
        if self.store.is_empty() {
            self.set_error(BachatError::EmptyStore.to_string());
            return;
        }
        self.open_dialog(ActiveDialog::ConfirmClear);
    }

    /// Clear all expenses (after confirmation)
    pub fn confirm_clear(&mut self) {
        self.close_dialog();
        match self.store.clear() {
            Ok(()) => {
                self.selected = None;
                self.set_success("All expenses cleared");
            }
            Err(err) => self.set_error(err.to_string()),
        }
    }

    /// Sort the table by a column, toggling that column's direction
    pub fn sort(&mut self, field: SortField) {
        let ascending = self.store.sort_state().ascending(field);
        self.store.toggle_sort(field);
        let direction = if ascending { "ascending" } else { "descending" };
        self.set_info(format!("Sorted by {} ({})", field, direction));
    }

    /// Switch between the dark and light themes
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Move the table selection down
    pub fn select_next(&mut self) {
        if let Some(index) = self.selected {
            if index + 1 < self.store.len() {
                self.selected = Some(index + 1);
            }
        } else if !self.store.is_empty() {
            self.selected = Some(0);
        }
    }

    /// Move the table selection up
    pub fn select_previous(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some(index.saturating_sub(1));
        } else if !self.store.is_empty() {
            self.selected = Some(0);
        }
    }

    /// Move focus to the table, picking a selection if there is none
    pub fn focus_table(&mut self) {
        self.focused_panel = FocusedPanel::Table;
        if self.selected.is_none() && !self.store.is_empty() {
            self.selected = Some(0);
        }
    }

    /// Move focus back to the entry form
    pub fn focus_form(&mut self) {
        self.focused_panel = FocusedPanel::Form;
    }
}
