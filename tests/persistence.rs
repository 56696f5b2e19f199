//! Cross-module persistence tests
//!
//! Exercise the store and the flat-file codec together the way a session
//! does: load at startup, mutate in memory, save at shutdown.

use tempfile::TempDir;

use bachat::models::{Expense, SortField};
use bachat::storage::{load_expenses, save_expenses};
use bachat::store::ExpenseStore;

fn expense(desc: &str, cat: &str, amount: &str, date: &str) -> Expense {
    Expense::new(desc, cat, amount, date)
}

#[test]
fn session_round_trip_preserves_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("expense.txt");

    // First session: start empty, enter two expenses, save on quit.
    let mut store = ExpenseStore::from_records(load_expenses(&path).unwrap());
    assert!(store.is_empty());

    store
        .append(expense("Weekly groceries", "Food", "54.20", "2024-03-05"))
        .unwrap();
    store
        .append(expense("Bus ticket", "Travel", "2.75", "2024-03-01"))
        .unwrap();
    save_expenses(store.records(), &path).unwrap();

    // Second session: everything is back, categories regenerated.
    let store = ExpenseStore::from_records(load_expenses(&path).unwrap());
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].description, "Weekly groceries");
    assert_eq!(store.categories(), ["Food", "Travel"]);
}

#[test]
fn sorted_order_is_what_gets_persisted() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("expense.txt");

    let mut store = ExpenseStore::from_records(vec![
        expense("Lunch", "Food", "12.50", "2024-03-05"),
        expense("Bus", "Travel", "2.75", "2024-03-01"),
        expense("Cinema", "Fun", "9", "2024-02-20"),
    ]);

    store.toggle_sort(SortField::Date);
    save_expenses(store.records(), &path).unwrap();

    let reloaded = load_expenses(&path).unwrap();
    let dates: Vec<_> = reloaded.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, ["2024-02-20", "2024-03-01", "2024-03-05"]);
}

#[test]
fn deleting_then_saving_shrinks_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("expense.txt");

    let mut store = ExpenseStore::from_records(vec![
        expense("Lunch", "Food", "12.50", "2024-03-05"),
        expense("Bus", "Travel", "2.75", "2024-03-01"),
    ]);
    store.delete_at(0).unwrap();
    save_expenses(store.records(), &path).unwrap();

    let reloaded = load_expenses(&path).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].description, "Bus");
}

#[test]
fn spaces_survive_but_underscores_do_not() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("expense.txt");

    let mut store = ExpenseStore::new();
    store
        .append(expense("Weekly shop", "Daily needs", "33", "2024-04-01"))
        .unwrap();
    store
        .append(expense("gift_card", "Misc", "25", "2024-04-02"))
        .unwrap();
    save_expenses(store.records(), &path).unwrap();

    let reloaded = load_expenses(&path).unwrap();
    // Spaces round-trip through the underscore escape
    assert_eq!(reloaded[0].description, "Weekly shop");
    assert_eq!(reloaded[0].category, "Daily needs");
    // A literal underscore is indistinguishable from an escaped space
    assert_eq!(reloaded[1].description, "gift card");
}

#[test]
fn loading_a_preexisting_expense_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("expense.txt");

    // Byte-for-byte the layout an existing expense file carries.
    std::fs::write(
        &path,
        "2\nMonthly_rent Housing 800 2024-03-01\nCoffee Food 3.20 2024-03-04",
    )
    .unwrap();

    let store = ExpenseStore::from_records(load_expenses(&path).unwrap());
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].description, "Monthly rent");
    assert_eq!(store.categories(), ["Housing", "Food"]);
}
