//! Defines the endpoint for fetching a single expense.

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

/// A route handler for getting an expense by its ID.
///
/// Responds with the status code 404 if the expense does not exist.
pub async fn get_expense_endpoint<E>(
    State(state): State<AppState<E>>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
) -> Response
where
    E: ExpenseStore,
{
    match parse_expense_id(expense_id).and_then(|id| state.expense_store.get(id)) {
        Ok(expense) => ApiResponse::data(expense).into_response(),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use time::macros::date;

    use crate::{
        api_response::ApiResponse,
        expense::{Expense, NewExpense, get_expense_endpoint},
        stores::ExpenseStore,
        test_utils::{must_create_test_state, parse_json_body},
    };

    #[tokio::test]
    async fn returns_expense() {
        let state = must_create_test_state();
        let want = state
            .expense_store
            .create(NewExpense {
                amount: 9.99,
                category: "Entertainment".to_owned(),
                date: date!(2024 - 05 - 04),
                description: None,
            })
            .unwrap();

        let response = get_expense_endpoint(State(state), Ok(Path(want.id))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: ApiResponse<Expense> = parse_json_body(response).await;
        assert_eq!(body, ApiResponse::data(want));
    }

    #[tokio::test]
    async fn missing_expense_is_not_found() {
        let state = must_create_test_state();

        let response = get_expense_endpoint(State(state), Ok(Path(1))).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ApiResponse<()> = parse_json_body(response).await;
        assert_eq!(body, ApiResponse::failure("Expense not found"));
    }
}
