//! In-memory expense store
//!
//! The store is the authoritative model for the session: an ordered sequence
//! of expense records, the list of categories seen so far, and the three
//! per-column sort directions. The presentation layer is a view over this
//! struct and never holds record state of its own.
//!
//! The store is owned by the single control thread for the whole process
//! lifetime, so all mutation goes through plain `&mut self`.

use std::cmp::Ordering;

use crate::error::{BachatError, BachatResult};
use crate::models::{Expense, SortField};

/// Ascending/descending flags for the three sortable columns
///
/// Each flag belongs to one column only and flips when that column is
/// sorted, independently of the other two.
#[derive(Debug, Clone, Copy)]
pub struct SortState {
    pub category_ascending: bool,
    pub amount_ascending: bool,
    pub date_ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            category_ascending: true,
            amount_ascending: true,
            date_ascending: true,
        }
    }
}

impl SortState {
    /// Current direction for a field
    pub fn ascending(&self, field: SortField) -> bool {
        match field {
            SortField::Category => self.category_ascending,
            SortField::Amount => self.amount_ascending,
            SortField::Date => self.date_ascending,
        }
    }

    /// Flip the direction of a single field, leaving the others untouched
    pub fn flip(&mut self, field: SortField) {
        match field {
            SortField::Category => self.category_ascending = !self.category_ascending,
            SortField::Amount => self.amount_ascending = !self.amount_ascending,
            SortField::Date => self.date_ascending = !self.date_ascending,
        }
    }
}

/// The ordered collection of expense records for the session
#[derive(Debug, Default)]
pub struct ExpenseStore {
    records: Vec<Expense>,
    categories: Vec<String>,
    sort_state: SortState,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated from already-loaded records
    ///
    /// Records from the expense file are trusted and bypass validation;
    /// the category list is regenerated from them.
    pub fn from_records(records: Vec<Expense>) -> Self {
        let mut store = Self::new();
        store.replace_all(records);
        store
    }

    /// All records, in display order
    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Current sort directions
    pub fn sort_state(&self) -> SortState {
        self.sort_state
    }

    /// Append a user-entered record to the end of the store
    ///
    /// All four fields must be non-empty; otherwise the store is left
    /// unchanged and a validation error is returned.
    pub fn append(&mut self, expense: Expense) -> BachatResult<()> {
        if let Some(field) = expense.first_empty_field() {
            return Err(BachatError::empty_field(field));
        }
        self.remember_category(expense.category.clone());
        self.records.push(expense);
        Ok(())
    }

    /// Remove the record at `index`
    pub fn delete_at(&mut self, index: usize) -> BachatResult<Expense> {
        if self.records.is_empty() {
            return Err(BachatError::EmptyStore);
        }
        if index >= self.records.len() {
            return Err(BachatError::OutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Remove every record
    ///
    /// Confirmation is the caller's job; an empty store reports the
    /// "no expenses" condition instead of clearing.
    pub fn clear(&mut self) -> BachatResult<()> {
        if self.records.is_empty() {
            return Err(BachatError::EmptyStore);
        }
        self.records.clear();
        Ok(())
    }

    /// Replace the whole sequence, regenerating the category list
    pub fn replace_all(&mut self, records: Vec<Expense>) {
        self.categories.clear();
        for record in &records {
            if !record.category.is_empty() {
                self.remember_category(record.category.clone());
            }
        }
        self.records = records;
    }

    /// Reorder the records by `field` in the given direction
    pub fn sort_by(&mut self, field: SortField, ascending: bool) {
        self.records.sort_by(|a, b| {
            let ord = compare_field(a, b, field);
            if ascending {
                ord
            } else {
                ord.reverse()
            }
        });
    }

    /// Sort by `field` using its current direction, then flip that
    /// direction only
    ///
    /// This is the column-click behavior: repeated sorts on one column
    /// alternate ascending/descending while the other columns' directions
    /// stay where they were.
    pub fn toggle_sort(&mut self, field: SortField) {
        let ascending = self.sort_state.ascending(field);
        self.sort_by(field, ascending);
        self.sort_state.flip(field);
    }

    fn remember_category(&mut self, category: String) {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }
}

/// Compare two records on one column
fn compare_field(a: &Expense, b: &Expense, field: SortField) -> Ordering {
    match field {
        SortField::Category => a.category.cmp(&b.category),
        SortField::Amount => compare_amounts(&a.amount, &b.amount),
        SortField::Date => a.date.cmp(&b.date),
    }
}

/// Numeric comparison with string fallback
///
/// Both operands are parsed as f64; when either parse fails, that pair is
/// compared lexicographically instead. With a mix of numeric and
/// non-numeric amounts this yields a different total order than a pure
/// numeric sort would; that is the accepted behavior of the amount column,
/// not something to repair here.
fn compare_amounts(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(desc: &str, cat: &str, amount: &str, date: &str) -> Expense {
        Expense::new(desc, cat, amount, date)
    }

    fn sample_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store
            .append(expense("Lunch", "Food", "12.50", "2024-03-05"))
            .unwrap();
        store
            .append(expense("Bus", "Travel", "2.75", "2024-03-01"))
            .unwrap();
        store
            .append(expense("Cinema", "Fun", "9", "2024-02-20"))
            .unwrap();
        store
    }

    #[test]
    fn test_append_rejects_empty_field() {
        let mut store = ExpenseStore::new();
        let err = store
            .append(expense("", "X", "1", "2024-01-01"))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_collects_categories() {
        let store = sample_store();
        assert_eq!(store.categories(), ["Food", "Travel", "Fun"]);
    }

    #[test]
    fn test_categories_deduplicate_in_first_seen_order() {
        let mut store = sample_store();
        store
            .append(expense("Dinner", "Food", "20", "2024-03-06"))
            .unwrap();
        assert_eq!(store.categories(), ["Food", "Travel", "Fun"]);
    }

    #[test]
    fn test_delete_at_on_empty_store() {
        let mut store = ExpenseStore::new();
        let err = store.delete_at(0).unwrap_err();
        assert!(matches!(err, BachatError::EmptyStore));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_delete_at_out_of_range() {
        let mut store = sample_store();
        let err = store.delete_at(7).unwrap_err();
        assert!(matches!(err, BachatError::OutOfRange { index: 7, len: 3 }));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_delete_at_removes_positionally() {
        let mut store = sample_store();
        let removed = store.delete_at(1).unwrap();
        assert_eq!(removed.description, "Bus");
        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].description, "Cinema");
    }

    #[test]
    fn test_clear() {
        let mut store = sample_store();
        store.clear().unwrap();
        assert!(store.is_empty());

        let err = store.clear().unwrap_err();
        assert!(matches!(err, BachatError::EmptyStore));
    }

    #[test]
    fn test_amount_sort_numeric_with_string_fallback() {
        let mut store = ExpenseStore::new();
        for amount in ["10", "2", "abc"] {
            store
                .append(expense("x", "c", amount, "2024-01-01"))
                .unwrap();
        }
        store.sort_by(SortField::Amount, true);
        let amounts: Vec<_> = store.records().iter().map(|e| e.amount.as_str()).collect();
        assert_eq!(amounts, ["2", "10", "abc"]);
    }

    #[test]
    fn test_date_sort_is_lexicographic() {
        let mut store = ExpenseStore::new();
        for date in ["2024-3-5", "2024-10-01"] {
            store.append(expense("x", "c", "1", date)).unwrap();
        }
        store.sort_by(SortField::Date, true);
        // Plain string order: "2024-1..." < "2024-3...", not calendar order.
        assert_eq!(store.records()[0].date, "2024-10-01");
    }

    #[test]
    fn test_toggle_sort_alternates_direction() {
        let mut store = sample_store();
        store.toggle_sort(SortField::Category);
        let cats: Vec<_> = store.records().iter().map(|e| e.category.as_str()).collect();
        assert_eq!(cats, ["Food", "Fun", "Travel"]);

        store.toggle_sort(SortField::Category);
        let cats: Vec<_> = store.records().iter().map(|e| e.category.as_str()).collect();
        assert_eq!(cats, ["Travel", "Fun", "Food"]);
    }

    #[test]
    fn test_toggle_sort_directions_are_independent() {
        let mut store = sample_store();
        store.toggle_sort(SortField::Category);
        store.toggle_sort(SortField::Category);

        // Category flips twice; amount was never touched and still sorts
        // ascending on its first use.
        assert!(store.sort_state().amount_ascending);
        store.toggle_sort(SortField::Amount);
        let amounts: Vec<_> = store.records().iter().map(|e| e.amount.as_str()).collect();
        assert_eq!(amounts, ["2.75", "9", "12.50"]);
    }

    #[test]
    fn test_replace_all_rebuilds_categories() {
        let mut store = sample_store();
        store.replace_all(vec![
            expense("Rent", "Housing", "800", "2024-03-01"),
            expense("Lunch", "Food", "11", "2024-03-02"),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.categories(), ["Housing", "Food"]);
    }
}
