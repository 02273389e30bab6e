//! Defines the endpoint for the per-category totals of a month.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    api_response::ApiResponse,
    expense::{
        core::CategoryTotal,
        month::{MonthFilter, MonthQuery},
    },
    stores::ExpenseStore,
};

/// A route handler for summing a month's expenses by category, largest total first.
///
/// The `month` query parameter is required.
pub async fn get_expense_summary_endpoint<E>(
    State(state): State<AppState<E>>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Response
where
    E: ExpenseStore,
{
    match summarize_month(query, &state.expense_store) {
        Ok(summary) if summary.is_empty() => ApiResponse::data(summary)
            .with_message("No expenses found for the given month.")
            .into_response(),
        Ok(summary) => ApiResponse::data(summary)
            .with_message("Expense summary fetched successfully.")
            .into_response(),
        Err(error) => error.into_response(),
    }
}

fn summarize_month<E>(
    query: Result<Query<MonthQuery>, QueryRejection>,
    store: &E,
) -> Result<Vec<CategoryTotal>, Error>
where
    E: ExpenseStore,
{
    let Query(query) = query.map_err(|rejection| Error::InvalidQuery(rejection.body_text()))?;
    let month = MonthFilter::from_query(query.month.as_deref())?;

    tracing::debug!(
        "Summarizing expenses from {} to {}",
        month.start(),
        month.end()
    );

    store.summarize(month.range())
}
