//! Contains traits and implementations for objects that store [expenses](crate::expense::Expense).

mod expense;

pub mod sqlite;

pub use expense::{ExpenseQuery, ExpenseStore, SortOrder};
