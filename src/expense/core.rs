//! The expense domain type and its SQLite table.

use axum::extract::{Path, rejection::PathRejection};
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// The store-assigned identifier of an expense.
pub type ExpenseId = i64;

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The id for the expense, assigned when it is created.
    pub id: ExpenseId,
    /// How much was spent. Never negative.
    pub amount: f64,
    /// The label used to group expenses, e.g. "Food".
    pub category: String,
    /// The day the expense occurred.
    pub date: Date,
    /// Optional free text describing the expense.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A validated expense that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// How much was spent.
    pub amount: f64,
    /// The trimmed, non-empty category label.
    pub category: String,
    /// The day the expense occurred.
    pub date: Date,
    /// The trimmed description, `None` if empty.
    pub description: Option<String>,
}

/// A validated partial update to an existing expense.
///
/// `None` leaves a field unchanged. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    /// The new amount.
    pub amount: Option<f64>,
    /// The new category.
    pub category: Option<String>,
    /// The new date.
    pub date: Option<Date>,
    /// The new description.
    pub description: Option<Option<String>>,
}

/// The total amount spent in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category the expenses were grouped by.
    #[serde(rename = "_id")]
    pub category: String,
    /// The sum of the amounts in the category.
    pub total: f64,
}

/// Create the `expense` table and its indexes if they do not exist.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount REAL NOT NULL CHECK (amount >= 0),
            category TEXT NOT NULL CHECK (length(trim(category)) > 0),
            date TEXT NOT NULL,
            description TEXT
        );
        CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date);
        CREATE INDEX IF NOT EXISTS idx_expense_category_date ON expense(category, date);",
    )?;

    Ok(())
}

/// The columns expected by [map_row_to_expense], in order.
pub const EXPENSE_COLUMNS: &str = "id, amount, category, date, description";

/// Map a row selected with [EXPENSE_COLUMNS] to an [Expense].
pub fn map_row_to_expense(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let category = row.get(2)?;
    let date = row.get(3)?;
    let description = row.get(4)?;

    Ok(Expense {
        id,
        amount,
        category,
        date,
        description,
    })
}

/// Extract the expense ID from the path, rejecting malformed IDs as invalid input.
pub(crate) fn parse_expense_id(
    path: Result<Path<ExpenseId>, PathRejection>,
) -> Result<ExpenseId, Error> {
    path.map(|Path(id)| id)
        .map_err(|rejection| Error::InvalidExpenseId(rejection.body_text()))
}
