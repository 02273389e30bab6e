use std::ops::Range;

use rusqlite::Connection;
use time::Date;

use crate::{
    Error,
    expense::{CategoryTotal, Expense, ExpenseId, ExpensePatch, NewExpense},
    pagination::PaginationConfig,
    stores::{
        ExpenseQuery, ExpenseStore,
        sqlite::{SQLAppState, create_app_state},
    },
};

#[track_caller]
pub(crate) fn must_create_test_state() -> SQLAppState {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");

    create_app_state(connection, PaginationConfig::default())
        .expect("Could not initialize database.")
}

/// A store that fails every operation as if the database lock was poisoned.
#[derive(Debug, Clone)]
pub(crate) struct FailingExpenseStore;

impl ExpenseStore for FailingExpenseStore {
    fn create(&self, _expense: NewExpense) -> Result<Expense, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get(&self, _id: ExpenseId) -> Result<Expense, Error> {
        Err(Error::DatabaseLockError)
    }

    fn get_query(&self, _query: ExpenseQuery) -> Result<Vec<Expense>, Error> {
        Err(Error::DatabaseLockError)
    }

    fn count(&self, _date_range: Option<Range<Date>>) -> Result<u64, Error> {
        Err(Error::DatabaseLockError)
    }

    fn update(&self, _id: ExpenseId, _patch: ExpensePatch) -> Result<Expense, Error> {
        Err(Error::DatabaseLockError)
    }

    fn delete(&self, _id: ExpenseId) -> Result<(), Error> {
        Err(Error::DatabaseLockError)
    }

    fn summarize(&self, _date_range: Range<Date>) -> Result<Vec<CategoryTotal>, Error> {
        Err(Error::DatabaseLockError)
    }
}
