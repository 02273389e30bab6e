//! Defines the endpoint for recording a new expense.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    api_response::ApiResponse,
    expense::{core::Expense, form::ExpenseForm},
    stores::ExpenseStore,
};

/// A route handler for creating an expense, responds with the stored expense
/// and the status code 201.
pub async fn create_expense_endpoint<E>(
    State(state): State<AppState<E>>,
    form: Result<Json<ExpenseForm>, JsonRejection>,
) -> Response
where
    E: ExpenseStore,
{
    match create_expense(form, &state.expense_store) {
        Ok(expense) => {
            tracing::debug!("Created expense {}", expense.id);
            (StatusCode::CREATED, ApiResponse::data(expense)).into_response()
        }
        Err(error) => error.into_response(),
    }
}

fn create_expense<E>(
    form: Result<Json<ExpenseForm>, JsonRejection>,
    store: &E,
) -> Result<Expense, Error>
where
    E: ExpenseStore,
{
    let Json(form) = form.map_err(|rejection| Error::InvalidBody(rejection.body_text()))?;
    let new_expense = form.into_new_expense()?;

    store.create(new_expense)
}
