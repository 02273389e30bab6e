use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::{Date, Month};

use expense_tracker::{
    expense::NewExpense,
    initialize_db,
    stores::{ExpenseStore, sqlite::SQLiteExpenseStore},
};

/// A utility for creating a test database for the expense tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Category, amount, day of month and description for each sample expense.
const SAMPLE_EXPENSES: [(&str, f64, u8, Option<&str>); 6] = [
    ("Food", 12.5, 3, Some("Lunch with friends")),
    ("Rent", 450.0, 1, None),
    ("Transport", 30.0, 7, Some("Bus pass")),
    ("Food", 64.2, 14, Some("Groceries")),
    ("Entertainment", 18.0, 21, Some("Cinema")),
    ("Utilities", 95.75, 26, Some("Power bill")),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let store = SQLiteExpenseStore::new(Arc::new(Mutex::new(conn)));

    println!("Creating test expenses...");

    let mut count = 0;
    for month in [Month::January, Month::February, Month::March] {
        for (category, amount, day, description) in SAMPLE_EXPENSES {
            store.create(NewExpense {
                amount,
                category: category.to_owned(),
                date: Date::from_calendar_date(2024, month, day)?,
                description: description.map(str::to_owned),
            })?;
            count += 1;
        }
    }

    println!("Created {count} expenses.");
    println!("Success!");

    Ok(())
}
