//! Defines the expense store trait.

use std::ops::Range;

use time::Date;

use crate::{
    Error,
    expense::{CategoryTotal, Expense, ExpenseId, ExpensePatch, NewExpense},
};

/// Handles the creation, retrieval, modification and aggregation of expenses.
pub trait ExpenseStore {
    /// Create a new expense in the store, assigning it a new ID.
    fn create(&self, expense: NewExpense) -> Result<Expense, Error>;

    /// Retrieve an expense from the store.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to a stored expense.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Retrieve expenses from the store in the way defined by `query`.
    fn get_query(&self, query: ExpenseQuery) -> Result<Vec<Expense>, Error>;

    /// Count the expenses within `date_range`, or all expenses if `None`.
    fn count(&self, date_range: Option<Range<Date>>) -> Result<u64, Error>;

    /// Apply `patch` to the expense with `id` and return the updated expense.
    ///
    /// # Errors
    /// Returns [Error::UpdateMissingExpense] if `id` does not refer to a stored expense.
    fn update(&self, id: ExpenseId, patch: ExpensePatch) -> Result<Expense, Error>;

    /// Permanently remove the expense with `id`.
    ///
    /// # Errors
    /// Returns [Error::DeleteMissingExpense] if `id` does not refer to a stored expense.
    fn delete(&self, id: ExpenseId) -> Result<(), Error>;

    /// Sum the expenses within `date_range` by category, largest total first.
    ///
    /// Categories with equal totals are ordered by name.
    fn summarize(&self, date_range: Range<Date>) -> Result<Vec<CategoryTotal>, Error>;
}

/// Defines how expenses should be fetched from [ExpenseStore::get_query].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseQuery {
    /// Include expenses within `date_range` (start inclusive, end exclusive).
    pub date_range: Option<Range<Date>>,
    /// Orders expenses by date in the order `sort_date`, then by ID in the same
    /// order. None returns expenses in the order they are stored.
    pub sort_date: Option<SortOrder>,
    /// Skip the first N expenses.
    pub offset: u64,
    /// Selects up to the first N (`limit`) expenses.
    pub limit: Option<u64>,
}

/// The order to sort expenses in an [ExpenseQuery].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}
