//! Defines the endpoint for listing expenses a page at a time.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    expense::{core::Expense, month::MonthFilter},
    pagination::{PageRequest, PaginationConfig},
    stores::{ExpenseQuery, ExpenseStore, SortOrder},
};

/// The query string for listing expenses.
///
/// Values are kept as strings so that bad page numbers fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListExpensesQuery {
    /// Only list expenses in this month (`YYYY-MM`).
    pub month: Option<String>,
    /// The 1-based page number.
    pub page: Option<String>,
    /// The maximum number of expenses per page.
    pub limit: Option<String>,
}

/// One page of expenses, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePage {
    /// Always true, the page is only built for successful requests.
    pub success: bool,
    /// The expenses on this page.
    pub data: Vec<Expense>,
    /// The number of pages for the current filter.
    pub total_pages: u64,
    /// The page that was returned.
    pub current_page: u64,
}

/// A route handler for listing expenses, optionally within a month.
pub async fn list_expenses_endpoint<E>(
    State(state): State<AppState<E>>,
    query: Result<Query<ListExpensesQuery>, QueryRejection>,
) -> Response
where
    E: ExpenseStore,
{
    let result = query
        .map_err(|rejection| Error::InvalidQuery(rejection.body_text()))
        .and_then(|Query(query)| {
            list_expenses(&query, &state.expense_store, &state.pagination_config)
        });

    match result {
        Ok(page) => Json(page).into_response(),
        Err(error) => error.into_response(),
    }
}

fn list_expenses<E>(
    query: &ListExpensesQuery,
    store: &E,
    pagination_config: &PaginationConfig,
) -> Result<ExpensePage, Error>
where
    E: ExpenseStore,
{
    let month = query
        .month
        .as_deref()
        .filter(|month| !month.is_empty())
        .map(str::parse::<MonthFilter>)
        .transpose()?;
    let date_range = month.as_ref().map(MonthFilter::range);

    let page_request = PageRequest::from_query(
        query.page.as_deref(),
        query.limit.as_deref(),
        pagination_config,
    );

    let expenses = store.get_query(ExpenseQuery {
        date_range: date_range.clone(),
        sort_date: Some(SortOrder::Descending),
        offset: page_request.offset(),
        limit: Some(page_request.limit),
    })?;
    let total_count = store.count(date_range)?;

    Ok(ExpensePage {
        success: true,
        data: expenses,
        total_pages: page_request.page_count(total_count),
        current_page: page_request.page,
    })
}

#[cfg(test)]
mod tests {
    use time::{Date, Month, macros::date};

    use crate::{
        Error,
        expense::{
            NewExpense,
            list_endpoint::{ListExpensesQuery, list_expenses},
        },
        pagination::PaginationConfig,
        stores::ExpenseStore,
        test_utils::must_create_test_state,
    };

    fn query(month: Option<&str>, page: Option<&str>, limit: Option<&str>) -> ListExpensesQuery {
        ListExpensesQuery {
            month: month.map(str::to_owned),
            page: page.map(str::to_owned),
            limit: limit.map(str::to_owned),
        }
    }

    fn add_expense(store: &impl ExpenseStore, amount: f64, date: Date) {
        store
            .create(NewExpense {
                amount,
                category: "Food".to_owned(),
                date,
                description: None,
            })
            .unwrap();
    }

    #[test]
    fn second_page_holds_the_remainder() {
        let state = must_create_test_state();
        for day in 1..=15 {
            let date = Date::from_calendar_date(2024, Month::March, day).unwrap();
            add_expense(&state.expense_store, day as f64, date);
        }

        let got = list_expenses(
            &query(None, Some("2"), Some("10")),
            &state.expense_store,
            &PaginationConfig::default(),
        )
        .unwrap();

        assert_eq!(got.data.len(), 5);
        assert_eq!(got.total_pages, 2);
        assert_eq!(got.current_page, 2);
        // Newest first, so the second page holds the five oldest expenses.
        let amounts: Vec<_> = got.data.iter().map(|expense| expense.amount).collect();
        assert_eq!(amounts, [5.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn filters_by_month() {
        let state = must_create_test_state();
        add_expense(&state.expense_store, 1.0, date!(2024 - 02 - 29));
        add_expense(&state.expense_store, 2.0, date!(2024 - 03 - 01));
        add_expense(&state.expense_store, 3.0, date!(2024 - 04 - 01));

        let got = list_expenses(
            &query(Some("2024-03"), None, None),
            &state.expense_store,
            &PaginationConfig::default(),
        )
        .unwrap();

        assert_eq!(got.data.len(), 1);
        assert_eq!(got.data[0].amount, 2.0);
        assert_eq!(got.total_pages, 1);
        assert_eq!(got.current_page, 1);
    }

    #[test]
    fn empty_month_lists_everything() {
        let state = must_create_test_state();
        add_expense(&state.expense_store, 1.0, date!(2024 - 02 - 29));
        add_expense(&state.expense_store, 2.0, date!(2024 - 03 - 01));

        let got = list_expenses(
            &query(Some(""), None, None),
            &state.expense_store,
            &PaginationConfig::default(),
        )
        .unwrap();

        assert_eq!(got.data.len(), 2);
    }

    #[test]
    fn rejects_malformed_month() {
        let state = must_create_test_state();

        let got = list_expenses(
            &query(Some("March"), None, None),
            &state.expense_store,
            &PaginationConfig::default(),
        );

        assert_eq!(got, Err(Error::InvalidMonth("March".to_owned())));
    }

    #[test]
    fn no_expenses_has_no_pages() {
        let state = must_create_test_state();

        let got = list_expenses(
            &query(None, None, None),
            &state.expense_store,
            &PaginationConfig::default(),
        )
        .unwrap();

        assert!(got.data.is_empty());
        assert_eq!(got.total_pages, 0);
        assert_eq!(got.current_page, 1);
    }
}
