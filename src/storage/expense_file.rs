//! Flat-file codec for the expense file
//!
//! On-disk layout, kept bit-compatible with existing `expense.txt` files:
//!
//! ```text
//! <N>
//! <description_1> <category_1> <amount_1> <date_1>
//! ...
//! <description_N> <category_N> <amount_N> <date_N>
//! ```
//!
//! The first token is the record count; each record is four
//! space-separated tokens. Reading is purely token-based, so newline
//! placement carries no meaning.
//!
//! Spaces inside description and category are written as `_` and turned
//! back into spaces on read. A literal underscore in those fields is
//! therefore indistinguishable from an escaped space and also comes back
//! as a space. This is a known lossy limitation of the format, kept for
//! file compatibility; amount and date are written verbatim and must not
//! contain whitespace (unenforced).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{BachatError, BachatResult};
use crate::models::Expense;

/// Write all records to `path`, overwriting any existing file
///
/// The write is a plain overwrite: no atomic rename and no backup. A
/// filesystem fault is returned to the caller and the previous file
/// contents must be assumed lost.
pub fn save_expenses(records: &[Expense], path: impl AsRef<Path>) -> BachatResult<()> {
    let path = path.as_ref();

    let file = File::create(path)
        .map_err(|e| BachatError::Storage(format!("Failed to create {}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    let write_err =
        |e| BachatError::Storage(format!("Failed to write {}: {}", path.display(), e));

    write!(writer, "{}", records.len()).map_err(write_err)?;
    for record in records {
        write!(
            writer,
            "\n{} {} {} {}",
            escape(&record.description),
            escape(&record.category),
            record.amount,
            record.date
        )
        .map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    Ok(())
}

/// Read records from `path`
///
/// A missing file is not an error: it is the first-run case and yields an
/// empty vec. Otherwise the file is tokenized on whitespace; an
/// unparseable count yields an empty vec, and running out of tokens
/// mid-file stops parsing and returns the records completed so far, so a
/// truncated file can never hang the load or fabricate records. Field
/// contents are trusted as-is, without the non-empty validation applied
/// to user input.
pub fn load_expenses(path: impl AsRef<Path>) -> BachatResult<Vec<Expense>> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| BachatError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    let mut tokens = contents.split_whitespace();

    let count: usize = match tokens.next().and_then(|t| t.parse().ok()) {
        Some(n) => n,
        None => return Ok(Vec::new()),
    };

    let mut records = Vec::new();
    for _ in 0..count {
        let (Some(description), Some(category), Some(amount), Some(date)) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            break;
        };
        records.push(Expense {
            description: unescape(description),
            category: unescape(category),
            amount: amount.to_string(),
            date: date.to_string(),
        });
    }

    Ok(records)
}

fn escape(field: &str) -> String {
    field.replace(' ', "_")
}

fn unescape(token: &str) -> String {
    token.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn expense(desc: &str, cat: &str, amount: &str, date: &str) -> Expense {
        Expense::new(desc, cat, amount, date)
    }

    #[test]
    fn test_round_trip_preserves_fields_and_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense.txt");

        let records = vec![
            expense("Weekly groceries", "Food", "54.20", "2024-03-05"),
            expense("Bus ticket", "Travel", "2.75", "2024-03-01"),
        ];

        save_expenses(&records, &path).unwrap();
        let loaded = load_expenses(&path).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_exact_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense.txt");

        let records = vec![
            expense("Weekly groceries", "Food", "54.20", "2024-03-05"),
            expense("Bus", "Travel", "2.75", "2024-03-01"),
        ];

        save_expenses(&records, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "2\nWeekly_groceries Food 54.20 2024-03-05\nBus Travel 2.75 2024-03-01"
        );
    }

    #[test]
    fn test_underscore_comes_back_as_space() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense.txt");

        let records = vec![expense("a_b", "Misc", "1", "2024-01-01")];
        save_expenses(&records, &path).unwrap();

        let loaded = load_expenses(&path).unwrap();
        assert_eq!(loaded[0].description, "a b");
    }

    #[test]
    fn test_missing_file_is_empty_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");
        assert_eq!(load_expenses(&path).unwrap(), Vec::new());
    }

    #[test]
    fn test_truncated_file_returns_complete_records_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense.txt");

        // Count claims three records but the file holds one full record
        // plus half of another.
        std::fs::write(&path, "3\nLunch Food 12.50 2024-03-05\nBus Travel").unwrap();

        let loaded = load_expenses(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].description, "Lunch");
    }

    #[test]
    fn test_garbage_count_loads_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense.txt");

        std::fs::write(&path, "banana\nLunch Food 12.50 2024-03-05").unwrap();
        assert_eq!(load_expenses(&path).unwrap(), Vec::new());
    }

    #[test]
    fn test_count_smaller_than_file_reads_only_count() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense.txt");

        std::fs::write(
            &path,
            "1\nLunch Food 12.50 2024-03-05\nBus Travel 2.75 2024-03-01",
        )
        .unwrap();

        let loaded = load_expenses(&path).unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_save_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense.txt");

        save_expenses(&[], &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0");
        assert_eq!(load_expenses(&path).unwrap(), Vec::new());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expense.txt");

        save_expenses(
            &[
                expense("Lunch", "Food", "12.50", "2024-03-05"),
                expense("Bus", "Travel", "2.75", "2024-03-01"),
            ],
            &path,
        )
        .unwrap();
        save_expenses(&[expense("Rent", "Housing", "800", "2024-03-01")], &path).unwrap();

        let loaded = load_expenses(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].description, "Rent");
    }
}
