//! Client-side views over a list of expenses.
//!
//! Provides filtering by month of year and category, simple statistics and
//! the share of spending per category. These never touch the store and work
//! on whatever page of expenses the caller already holds.

use serde::{Deserialize, Serialize};

use crate::expense::Expense;

/// The category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Narrows a list of expenses by month of year and category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Month of year, 1 to 12. Matches that month in any year.
    pub month: Option<u8>,
    /// Category to keep, compared case-insensitively.
    ///
    /// An empty string or [ALL_CATEGORIES] keeps every category.
    pub category: Option<String>,
}

impl ExpenseFilter {
    /// Whether `expense` passes both the month and category filters.
    pub fn matches(&self, expense: &Expense) -> bool {
        let month_matches = self
            .month
            .is_none_or(|month| u8::from(expense.date.month()) == month);

        let category_matches = match self.category.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(category) if category.eq_ignore_ascii_case(ALL_CATEGORIES) => true,
            Some(category) => expense.category.to_lowercase() == category.to_lowercase(),
        };

        month_matches && category_matches
    }

    /// The expenses that pass the filter, in their original order.
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses
            .iter()
            .filter(|expense| self.matches(expense))
            .collect()
    }
}

/// Total, largest and mean amount of a list of expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExpenseStats {
    /// Sum of all amounts.
    pub total: f64,
    /// The largest single amount.
    pub max: f64,
    /// The mean amount.
    pub average: f64,
}

/// Compute [ExpenseStats] for `expenses`.
///
/// Every field is zero when there are no expenses.
pub fn compute_stats<'a, I>(expenses: I) -> ExpenseStats
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut total = 0.0;
    let mut max = 0.0_f64;
    let mut count = 0_usize;

    for expense in expenses {
        total += expense.amount;
        max = max.max(expense.amount);
        count += 1;
    }

    if count == 0 {
        return ExpenseStats::default();
    }

    ExpenseStats {
        total,
        max,
        average: total / count as f64,
    }
}

/// Sum amounts per category.
///
/// Categories appear in the order they are first seen in `expenses`.
pub fn category_distribution<'a, I>(expenses: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut distribution: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        match distribution
            .iter_mut()
            .find(|(category, _)| *category == expense.category)
        {
            Some((_, total)) => *total += expense.amount,
            None => distribution.push((expense.category.clone(), expense.amount)),
        }
    }

    distribution
}
