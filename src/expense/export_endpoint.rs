//! Defines the endpoint for downloading a month of expenses as a JSON file.

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    expense::month::{MonthFilter, MonthQuery},
    stores::{ExpenseQuery, ExpenseStore, SortOrder},
};

/// A route handler that responds with every expense in a month as a
/// pretty-printed JSON attachment named `expenses-<month>.json`.
///
/// Responds with the status code 404 if the month has no expenses.
pub async fn export_expenses_endpoint<E>(
    State(state): State<AppState<E>>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Response
where
    E: ExpenseStore,
{
    match export_expenses(query, &state.expense_store) {
        Ok((month, body)) => (
            StatusCode::OK,
            [
                (CONTENT_TYPE, "application/json".to_owned()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"expenses-{month}.json\""),
                ),
            ],
            body,
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}

fn export_expenses<E>(
    query: Result<Query<MonthQuery>, QueryRejection>,
    store: &E,
) -> Result<(MonthFilter, String), Error>
where
    E: ExpenseStore,
{
    let Query(query) = query.map_err(|rejection| Error::InvalidQuery(rejection.body_text()))?;
    let month = MonthFilter::from_query(query.month.as_deref())?;

    let expenses = store.get_query(ExpenseQuery {
        date_range: Some(month.range()),
        sort_date: Some(SortOrder::Ascending),
        ..Default::default()
    })?;

    if expenses.is_empty() {
        return Err(Error::NoExpensesForMonth(month.to_string()));
    }

    let body = serde_json::to_string_pretty(&expenses)?;

    Ok((month, body))
}
