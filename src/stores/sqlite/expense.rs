//! Implements a SQLite backed expense store.
use std::{
    ops::Range,
    sync::{Arc, Mutex, MutexGuard},
};

use rusqlite::{Connection, params, params_from_iter, types::Value};
use time::Date;

use crate::{
    Error,
    expense::{
        CategoryTotal, EXPENSE_COLUMNS, Expense, ExpenseId, ExpensePatch, NewExpense,
        map_row_to_expense,
    },
    stores::{ExpenseQuery, ExpenseStore, SortOrder},
};

/// Stores expenses in a SQLite database.
///
/// The `expense` table must exist, see [initialize](crate::initialize_db).
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

// SQLite integers are signed, clamp so huge page numbers do not overflow.
fn to_sql_integer(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn date_range_clause(
    date_range: Option<Range<Date>>,
    query_parameters: &mut Vec<Value>,
) -> Option<String> {
    date_range.map(|date_range| {
        let clause = format!(
            "date >= ?{} AND date < ?{}",
            query_parameters.len() + 1,
            query_parameters.len() + 2,
        );
        query_parameters.push(Value::Text(date_range.start.to_string()));
        query_parameters.push(Value::Text(date_range.end.to_string()));
        clause
    })
}

impl ExpenseStore for SQLiteExpenseStore {
    /// Create a new expense in the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn create(&self, expense: NewExpense) -> Result<Expense, Error> {
        let connection = self.lock()?;

        let expense = connection
            .prepare(&format!(
                "INSERT INTO expense (amount, category, date, description)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING {EXPENSE_COLUMNS}"
            ))?
            .query_row(
                params![
                    expense.amount,
                    expense.category,
                    expense.date,
                    expense.description
                ],
                map_row_to_expense,
            )?;

        Ok(expense)
    }

    /// Retrieve an expense in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] there is some other SQL error.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        let connection = self.lock()?;

        let expense = connection
            .prepare(&format!(
                "SELECT {EXPENSE_COLUMNS} FROM expense WHERE id = :id"
            ))?
            .query_row(&[(":id", &id)], map_row_to_expense)?;

        Ok(expense)
    }

    /// Query for expenses in the database.
    ///
    /// # Errors
    /// This function will return a [Error::SqlError] there is a SQL error.
    fn get_query(&self, query: ExpenseQuery) -> Result<Vec<Expense>, Error> {
        let mut query_string_parts = vec![format!("SELECT {EXPENSE_COLUMNS} FROM expense")];
        let mut query_parameters = vec![];

        if let Some(clause) = date_range_clause(query.date_range, &mut query_parameters) {
            query_string_parts.push(format!("WHERE {clause}"));
        }

        match query.sort_date {
            Some(SortOrder::Ascending) => {
                query_string_parts.push("ORDER BY date ASC, id ASC".to_string())
            }
            Some(SortOrder::Descending) => {
                query_string_parts.push("ORDER BY date DESC, id DESC".to_string())
            }
            None => {}
        }

        match query.limit {
            Some(limit) => query_string_parts.push(format!(
                "LIMIT {} OFFSET {}",
                to_sql_integer(limit),
                to_sql_integer(query.offset)
            )),
            // SQLite only accepts OFFSET after LIMIT, -1 means no limit.
            None if query.offset > 0 => query_string_parts.push(format!(
                "LIMIT -1 OFFSET {}",
                to_sql_integer(query.offset)
            )),
            None => {}
        }

        let query_string = query_string_parts.join(" ");
        let params = params_from_iter(query_parameters.iter());

        let connection = self.lock()?;
        let mut statement = connection.prepare(&query_string)?;
        let expenses = statement
            .query_map(params, map_row_to_expense)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    fn count(&self, date_range: Option<Range<Date>>) -> Result<u64, Error> {
        let mut query_string = "SELECT COUNT(*) FROM expense".to_owned();
        let mut query_parameters = vec![];

        if let Some(clause) = date_range_clause(date_range, &mut query_parameters) {
            query_string.push_str(&format!(" WHERE {clause}"));
        }

        let connection = self.lock()?;
        let count: i64 = connection
            .prepare(&query_string)?
            .query_row(params_from_iter(query_parameters.iter()), |row| row.get(0))?;

        Ok(count.max(0) as u64)
    }

    /// Update the fields set in `patch` in a single statement.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::UpdateMissingExpense] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] there is some other SQL error.
    fn update(&self, id: ExpenseId, patch: ExpensePatch) -> Result<Expense, Error> {
        let connection = self.lock()?;

        let expense = connection
            .prepare(&format!(
                "UPDATE expense
                SET \
                    amount = COALESCE(?1, amount), \
                    category = COALESCE(?2, category), \
                    date = COALESCE(?3, date), \
                    description = CASE WHEN ?4 THEN ?5 ELSE description END \
                WHERE id = ?6
                RETURNING {EXPENSE_COLUMNS}"
            ))?
            .query_row(
                params![
                    patch.amount,
                    patch.category,
                    patch.date,
                    patch.description.is_some(),
                    patch.description.flatten(),
                    id,
                ],
                map_row_to_expense,
            )
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingExpense(id),
                error => error.into(),
            })?;

        Ok(expense)
    }

    /// Delete the expense with `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingExpense] if `id` does not refer to a valid expense,
    /// - or [Error::SqlError] there is some other SQL error.
    fn delete(&self, id: ExpenseId) -> Result<(), Error> {
        let connection = self.lock()?;

        let rows_affected =
            connection.execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])?;

        if rows_affected == 0 {
            return Err(Error::DeleteMissingExpense(id));
        }

        Ok(())
    }

    fn summarize(&self, date_range: Range<Date>) -> Result<Vec<CategoryTotal>, Error> {
        let connection = self.lock()?;

        let mut statement = connection.prepare(
            "SELECT category, SUM(amount) AS total
            FROM expense
            WHERE date >= ?1 AND date < ?2
            GROUP BY category
            ORDER BY total DESC, category ASC",
        )?;

        let totals = statement
            .query_map(params![date_range.start, date_range.end], |row| {
                Ok(CategoryTotal {
                    category: row.get(0)?,
                    total: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(totals)
    }
}
