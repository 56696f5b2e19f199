//! Storage layer for Bachat
//!
//! Persists the expense store to a whitespace-delimited flat file and
//! parses it back. The format is fixed for compatibility with existing
//! expense files; see [`expense_file`] for its exact shape and the known
//! escaping limitation.

pub mod expense_file;

pub use expense_file::{load_expenses, save_expenses};
