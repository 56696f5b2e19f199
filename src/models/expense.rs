//! Expense model
//!
//! A single expense record as entered in the form: four text fields, no
//! identifier. Identity is positional (the index in the store), and the
//! amount stays text; it is only parsed transiently when sorting.

use std::fmt;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expense {
    /// What the money was spent on
    pub description: String,

    /// Free-form category label (e.g. "Groceries")
    pub category: String,

    /// Decimal amount as entered, kept as text
    pub amount: String,

    /// ISO-8601 date string (e.g. "2024-03-05")
    pub date: String,
}

impl Expense {
    /// Create a new expense record
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            amount: amount.into(),
            date: date.into(),
        }
    }

    /// Name of the first empty field, if any
    ///
    /// User-entered records must have all four fields filled; records
    /// loaded from the expense file are trusted and never checked.
    pub fn first_empty_field(&self) -> Option<&'static str> {
        if self.description.is_empty() {
            Some("description")
        } else if self.category.is_empty() {
            Some("category")
        } else if self.amount.is_empty() {
            Some("amount")
        } else if self.date.is_empty() {
            Some("date")
        } else {
            None
        }
    }
}

/// A sortable column of the expense table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Category,
    Amount,
    Date,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::Amount => write!(f, "amount"),
            Self::Date => write!(f, "date"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_record_has_no_empty_field() {
        let expense = Expense::new("Lunch", "Food", "12.50", "2024-03-05");
        assert_eq!(expense.first_empty_field(), None);
    }

    #[test]
    fn test_first_empty_field_reports_in_order() {
        let expense = Expense::new("", "", "1", "2024-01-01");
        assert_eq!(expense.first_empty_field(), Some("description"));

        let expense = Expense::new("Bus", "", "", "");
        assert_eq!(expense.first_empty_field(), Some("category"));

        let expense = Expense::new("Bus", "Travel", "", "2024-01-01");
        assert_eq!(expense.first_empty_field(), Some("amount"));

        let expense = Expense::new("Bus", "Travel", "2.75", "");
        assert_eq!(expense.first_empty_field(), Some("date"));
    }

    #[test]
    fn test_sort_field_display() {
        assert_eq!(SortField::Category.to_string(), "category");
        assert_eq!(SortField::Amount.to_string(), "amount");
        assert_eq!(SortField::Date.to_string(), "date");
    }
}
