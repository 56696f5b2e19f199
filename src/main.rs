use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use bachat::config::{paths::BachatPaths, settings::Settings};
use bachat::models::Expense;
use bachat::storage::{load_expenses, save_expenses};
use bachat::store::ExpenseStore;
use bachat::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "bachat",
    version,
    about = "Terminal-based expense tracking application",
    long_about = "Bachat is a terminal-based expense tracker. Records entered \
                  in the form fill a sortable table and persist to a flat \
                  expense file between sessions. Run without arguments to \
                  open the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Print the stored expenses
    List,

    /// Add a single expense without opening the TUI
    Add {
        /// What the money was spent on
        description: String,
        /// Category label
        category: String,
        /// Amount (kept as entered)
        amount: String,
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete one expense by its position in the list
    Delete {
        /// Row number as shown by `bachat list` (starting at 1)
        index: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BachatPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) | None => {
            let mut store = ExpenseStore::from_records(load_expenses(paths.expense_file())?);
            run_tui(&mut store, &mut settings, &paths)?;
        }
        Some(Commands::List) => {
            let records = load_expenses(paths.expense_file())?;
            print_expenses(&records);
        }
        Some(Commands::Add {
            description,
            category,
            amount,
            date,
        }) => {
            let date = date.unwrap_or_else(|| Local::now().date_naive().to_string());
            let mut store = ExpenseStore::from_records(load_expenses(paths.expense_file())?);
            store.append(Expense::new(description, category, amount, date))?;
            paths.ensure_directories()?;
            save_expenses(store.records(), paths.expense_file())?;
            println!("Added expense ({} total).", store.len());
        }
        Some(Commands::Delete { index }) => {
            let mut store = ExpenseStore::from_records(load_expenses(paths.expense_file())?);
            if index == 0 {
                anyhow::bail!("Row numbers start at 1; see `bachat list`.");
            }
            let removed = store.delete_at(index - 1)?;
            save_expenses(store.records(), paths.expense_file())?;
            println!("Deleted \"{}\" ({} left).", removed.description, store.len());
        }
        Some(Commands::Config) => {
            println!("Bachat Configuration");
            println!("====================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expense file:   {}", paths.expense_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Theme: {:?}", settings.theme);
        }
    }

    Ok(())
}

/// Print the expense table to stdout
fn print_expenses(records: &[Expense]) {
    if records.is_empty() {
        println!("No expenses.");
        return;
    }

    println!(
        "{:>4}  {:<30} {:<16} {:>10}  {}",
        "#", "Description", "Category", "Amount", "Date"
    );
    for (i, expense) in records.iter().enumerate() {
        println!(
            "{:>4}  {:<30} {:<16} {:>10}  {}",
            i + 1,
            expense.description,
            expense.category,
            expense.amount,
            expense.date
        );
    }
}
