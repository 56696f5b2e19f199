//! Core data models for Bachat

pub mod expense;

pub use expense::{Expense, SortField};
