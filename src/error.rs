//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{api_response::ApiResponse, expense::ExpenseId};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request did not include an amount for the expense.
    #[error("Amount is required")]
    MissingAmount,

    /// The amount was less than zero.
    #[error("Amount cannot be negative")]
    NegativeAmount,

    /// The amount could not be read as a finite number.
    #[error("Invalid amount \"{0}\"")]
    InvalidAmount(String),

    /// The category was missing or only contained whitespace.
    #[error("Category is required")]
    MissingCategory,

    /// The request did not include a date for the expense.
    #[error("Date is required")]
    MissingDate,

    /// The date could not be parsed as a calendar date.
    #[error("Invalid date \"{0}\"")]
    InvalidDate(String),

    /// The month filter was missing or did not match `YYYY-MM`.
    #[error("Invalid month format \"{0}\". Use YYYY-MM.")]
    InvalidMonth(String),

    /// The request body could not be parsed as an expense.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The query string could not be parsed.
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    /// The expense ID in the path is not a valid ID.
    #[error("Invalid expense ID: {0}")]
    InvalidExpenseId(String),

    /// The requested expense was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("Expense not found")]
    NotFound,

    /// Tried to delete an expense that does not exist.
    #[error("Expense {0} not found, it may have already been deleted")]
    DeleteMissingExpense(ExpenseId),

    /// Tried to update an expense that does not exist.
    #[error("Expense {0} not found, it could not be updated")]
    UpdateMissingExpense(ExpenseId),

    /// An export was requested for a month with no expenses.
    #[error("No expenses found for {0}.")]
    NoExpensesForMonth(String),

    /// No route matches the requested path.
    #[error("No route for {0}")]
    UnknownRoute(String),

    /// The path exists but does not accept the request method.
    #[error("Method {method} is not allowed for {path}")]
    MethodNotAllowed {
        /// The rejected HTTP method.
        method: String,
        /// The requested path.
        path: String,
    },

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

/// The broad categories of [Error] that determine the response status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The client sent malformed or missing data.
    InvalidInput,
    /// The requested resource does not exist.
    NotFound,
    /// The resource exists but not for this HTTP method.
    MethodNotAllowed,
    /// Something went wrong on the server.
    Internal,
}

impl ErrorKind {
    /// The HTTP status code for this kind of error.
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Error {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingAmount
            | Error::NegativeAmount
            | Error::InvalidAmount(_)
            | Error::MissingCategory
            | Error::MissingDate
            | Error::InvalidDate(_)
            | Error::InvalidMonth(_)
            | Error::InvalidBody(_)
            | Error::InvalidQuery(_)
            | Error::InvalidExpenseId(_) => ErrorKind::InvalidInput,
            Error::NotFound
            | Error::DeleteMissingExpense(_)
            | Error::UpdateMissingExpense(_)
            | Error::NoExpensesForMonth(_)
            | Error::UnknownRoute(_) => ErrorKind::NotFound,
            Error::MethodNotAllowed { .. } => ErrorKind::MethodNotAllowed,
            Error::SqlError(_) | Error::DatabaseLockError | Error::JSONSerializationError(_) => {
                ErrorKind::Internal
            }
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Error::JSONSerializationError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let kind = self.kind();

        match kind {
            ErrorKind::Internal => tracing::error!("An unexpected error occurred: {}", self),
            _ => tracing::debug!("Rejecting request: {}", self),
        }

        (kind.status_code(), ApiResponse::<()>::failure(self.to_string())).into_response()
    }
}
