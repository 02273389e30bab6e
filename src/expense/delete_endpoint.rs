//! Defines the endpoint for deleting an expense.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    api_response::ApiResponse,
    expense::core::{ExpenseId, parse_expense_id},
    stores::ExpenseStore,
};

/// A route handler for permanently deleting an expense, responds with a
/// success message.
pub async fn delete_expense_endpoint<E>(
    State(state): State<AppState<E>>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
) -> Response
where
    E: ExpenseStore,
{
    let result = parse_expense_id(expense_id).and_then(|id| {
        state
            .expense_store
            .delete(id)
            .inspect_err(|error| tracing::warn!("Could not delete expense {id}: {error}"))
    });

    match result {
        Ok(()) => ApiResponse::message("Expense deleted successfully").into_response(),
        Err(error) => error.into_response(),
    }
}
