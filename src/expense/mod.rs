//! Expenses and the endpoints for recording, listing, summarising and exporting them.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod export_endpoint;
mod form;
mod get_endpoint;
mod list_endpoint;
mod month;
mod summary_endpoint;

pub use core::{
    CategoryTotal, EXPENSE_COLUMNS, Expense, ExpenseId, ExpensePatch, NewExpense,
    create_expense_table, map_row_to_expense,
};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use edit_endpoint::edit_expense_endpoint;
pub use export_endpoint::export_expenses_endpoint;
pub use form::{AmountInput, ExpenseForm, parse_date};
pub use get_endpoint::get_expense_endpoint;
pub use list_endpoint::{ExpensePage, ListExpensesQuery, list_expenses_endpoint};
pub use month::{MonthFilter, MonthQuery};
pub use summary_endpoint::get_expense_summary_endpoint;
