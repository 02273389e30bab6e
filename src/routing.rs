//! Application router configuration.

use axum::{
    Router,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, Error, endpoints,
    expense::{
        create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        export_expenses_endpoint, get_expense_endpoint, get_expense_summary_endpoint,
        list_expenses_endpoint,
    },
    stores::ExpenseStore,
};

/// Return a router with all the app's routes.
///
/// Cross-origin requests are allowed from any origin so that a frontend
/// served from elsewhere can call the API.
pub fn build_router<E>(state: AppState<E>) -> Router
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
{
    // The static summary and export routes must not be captured as an expense ID.
    Router::new()
        .route(
            endpoints::EXPENSE_SUMMARY,
            get(get_expense_summary_endpoint::<E>),
        )
        .route(endpoints::EXPENSE_EXPORT, get(export_expenses_endpoint::<E>))
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint::<E>).post(create_expense_endpoint::<E>),
        )
        .route(
            endpoints::EXPENSE,
            get(get_expense_endpoint::<E>)
                .put(edit_expense_endpoint::<E>)
                .delete(delete_expense_endpoint::<E>),
        )
        .fallback(get_404_not_found)
        .method_not_allowed_fallback(get_405_method_not_allowed)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn get_404_not_found(uri: Uri) -> Response {
    Error::UnknownRoute(uri.path().to_owned()).into_response()
}

async fn get_405_method_not_allowed(method: Method, uri: Uri) -> Response {
    Error::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_owned(),
    }
    .into_response()
}
