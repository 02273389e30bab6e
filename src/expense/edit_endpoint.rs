//! Defines the endpoint for updating an expense.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    api_response::ApiResponse,
    expense::{
        core::{Expense, ExpenseId, parse_expense_id},
        form::ExpenseForm,
    },
    stores::ExpenseStore,
};

/// A route handler for updating some or all fields of an expense.
///
/// Fields missing from the body are left unchanged.
pub async fn edit_expense_endpoint<E>(
    State(state): State<AppState<E>>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
    form: Result<Json<ExpenseForm>, JsonRejection>,
) -> Response
where
    E: ExpenseStore,
{
    match update_expense(expense_id, form, &state.expense_store) {
        Ok(expense) => ApiResponse::data(expense).into_response(),
        Err(error) => error.into_response(),
    }
}

fn update_expense<E>(
    expense_id: Result<Path<ExpenseId>, PathRejection>,
    form: Result<Json<ExpenseForm>, JsonRejection>,
    store: &E,
) -> Result<Expense, Error>
where
    E: ExpenseStore,
{
    let id = parse_expense_id(expense_id)?;
    let Json(form) = form.map_err(|rejection| Error::InvalidBody(rejection.body_text()))?;
    let patch = form.into_patch()?;

    store.update(id, patch).inspect_err(|error| {
        if let Error::UpdateMissingExpense(_) = error {
            tracing::warn!("Could not update expense {id}: {error}");
        }
    })
}
