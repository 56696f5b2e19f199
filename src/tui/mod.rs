//! Terminal User Interface module
//!
//! This module provides the interactive interface for Bachat using ratatui:
//! an entry form, the sortable expense table, a status bar, and the
//! confirm/help dialogs. All record state lives in the expense store; the
//! TUI is a view/controller over it.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

pub use app::App;
pub use terminal::run_tui;
