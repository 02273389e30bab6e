//! Implements a struct that holds the state of the REST server.

use crate::pagination::PaginationConfig;

/// The state of the REST server.
///
/// `E` is the store used to persist expenses, see [ExpenseStore](crate::stores::ExpenseStore).
#[derive(Debug, Clone)]
pub struct AppState<E> {
    /// The store for reading and writing expenses.
    pub expense_store: E,

    /// The config that controls how to page lists of expenses.
    pub pagination_config: PaginationConfig,
}

impl<E> AppState<E> {
    /// Create a new [AppState] around an already initialized `expense_store`.
    pub fn new(expense_store: E, pagination_config: PaginationConfig) -> Self {
        Self {
            expense_store,
            pagination_config,
        }
    }
}
