//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/expenses/{expense_id}', use [format_endpoint].

/// The route for listing and creating expenses.
pub const EXPENSES: &str = "/expenses";
/// The route for the per-category totals of a month.
pub const EXPENSE_SUMMARY: &str = "/expenses/summary";
/// The route for downloading a month of expenses as JSON.
pub const EXPENSE_EXPORT: &str = "/expenses/export";
/// The route for getting, updating and deleting a single expense.
pub const EXPENSE: &str = "/expenses/{expense_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter starts with a left brace and ends with the next right brace,
/// e.g. '{expense_id}' in '/expenses/{expense_id}'. Only the first parameter
/// is replaced.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
