//! Parsing and validation of expense data sent by clients.

use serde::{Deserialize, Deserializer};
use time::{
    Date, OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem,
    format_description::well_known::Rfc3339, macros::format_description,
};

use crate::{
    Error,
    expense::core::{ExpensePatch, NewExpense},
};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The JSON body for creating or updating an expense.
///
/// Every field is optional at this stage so that missing fields can be
/// reported with a specific error instead of a generic parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseForm {
    /// The amount as a number or numeric string.
    #[serde(default)]
    pub amount: Option<AmountInput>,
    /// The category label.
    #[serde(default)]
    pub category: Option<String>,
    /// A `YYYY-MM-DD` date or RFC 3339 date-time.
    #[serde(default)]
    pub date: Option<String>,
    /// `None` if absent, `Some(None)` if explicitly null.
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
}

/// An amount as sent by a client. Form inputs send numbers as strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A JSON number.
    Number(f64),
    /// A JSON string that should contain a number.
    Text(String),
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ExpenseForm {
    /// Validate the form for creating an expense.
    ///
    /// # Errors
    /// Returns an error if the amount, category or date are missing or invalid.
    pub fn into_new_expense(self) -> Result<NewExpense, Error> {
        let amount = parse_amount(self.amount.ok_or(Error::MissingAmount)?)?;
        let category = parse_category(self.category.as_deref())?;
        let date = parse_date(self.date.as_deref().ok_or(Error::MissingDate)?)?;
        let description = normalize_description(self.description.flatten());

        Ok(NewExpense {
            amount,
            category,
            date,
            description,
        })
    }

    /// Validate the form as a partial update.
    ///
    /// Absent fields are left unchanged, present fields follow the same rules
    /// as [ExpenseForm::into_new_expense].
    pub fn into_patch(self) -> Result<ExpensePatch, Error> {
        Ok(ExpensePatch {
            amount: self.amount.map(parse_amount).transpose()?,
            category: self
                .category
                .as_deref()
                .map(|category| parse_category(Some(category)))
                .transpose()?,
            date: self.date.as_deref().map(parse_date).transpose()?,
            description: self.description.map(normalize_description),
        })
    }
}

fn parse_amount(input: AmountInput) -> Result<f64, Error> {
    let amount = match input {
        AmountInput::Number(amount) => amount,
        AmountInput::Text(text) => {
            let trimmed = text.trim();

            if trimmed.is_empty() {
                return Err(Error::MissingAmount);
            }

            trimmed
                .parse::<f64>()
                .map_err(|_| Error::InvalidAmount(text.clone()))?
        }
    };

    if !amount.is_finite() {
        return Err(Error::InvalidAmount(amount.to_string()));
    }

    if amount < 0.0 {
        return Err(Error::NegativeAmount);
    }

    Ok(amount)
}

fn parse_category(category: Option<&str>) -> Result<String, Error> {
    match category.map(str::trim) {
        Some(category) if !category.is_empty() => Ok(category.to_owned()),
        _ => Err(Error::MissingCategory),
    }
}

/// Parse a calendar date from either `YYYY-MM-DD` or an RFC 3339 date-time.
///
/// Date-times are converted to UTC before the time of day is dropped.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    let text = text.trim();

    if text.is_empty() {
        return Err(Error::MissingDate);
    }

    Date::parse(text, DATE_FORMAT)
        .or_else(|_| {
            OffsetDateTime::parse(text, &Rfc3339)
                .map(|date_time| date_time.to_offset(UtcOffset::UTC).date())
        })
        .map_err(|_| Error::InvalidDate(text.to_owned()))
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|description| description.trim().to_owned())
        .filter(|description| !description.is_empty())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use crate::{
        Error,
        expense::{
            core::{ExpensePatch, NewExpense},
            form::{ExpenseForm, parse_date},
        },
    };

    fn form(value: serde_json::Value) -> ExpenseForm {
        serde_json::from_value(value).expect("could not deserialize form")
    }

    #[test]
    fn accepts_valid_expense() {
        let got = form(json!({
            "amount": 12.5,
            "category": "Food",
            "date": "2024-03-05",
            "description": "Lunch"
        }))
        .into_new_expense();

        assert_eq!(
            got,
            Ok(NewExpense {
                amount: 12.5,
                category: "Food".to_owned(),
                date: date!(2024 - 03 - 05),
                description: Some("Lunch".to_owned()),
            })
        );
    }

    #[test]
    fn accepts_amount_as_string() {
        let got = form(json!({"amount": " 42.10 ", "category": "Bills", "date": "2024-03-05"}))
            .into_new_expense()
            .unwrap();

        assert_eq!(got.amount, 42.10);
    }

    #[test]
    fn accepts_zero_amount() {
        let got = form(json!({"amount": 0, "category": "Bills", "date": "2024-03-05"}))
            .into_new_expense();

        assert!(got.is_ok());
    }

    #[test]
    fn trims_category_and_description() {
        let got = form(json!({
            "amount": 1,
            "category": "  Travel ",
            "date": "2024-03-05",
            "description": "   "
        }))
        .into_new_expense()
        .unwrap();

        assert_eq!(got.category, "Travel");
        assert_eq!(got.description, None);
    }

    #[test]
    fn rejects_missing_amount() {
        let got = form(json!({"category": "Food", "date": "2024-03-05"})).into_new_expense();

        assert_eq!(got, Err(Error::MissingAmount));
    }

    #[test]
    fn rejects_negative_amount() {
        let got = form(json!({"amount": -0.01, "category": "Food", "date": "2024-03-05"}))
            .into_new_expense();

        assert_eq!(got, Err(Error::NegativeAmount));
    }

    #[test]
    fn rejects_non_numeric_amount() {
        let got = form(json!({"amount": "twelve", "category": "Food", "date": "2024-03-05"}))
            .into_new_expense();

        assert_eq!(got, Err(Error::InvalidAmount("twelve".to_owned())));
    }

    #[test]
    fn rejects_empty_category() {
        let got =
            form(json!({"amount": 1, "category": "   ", "date": "2024-03-05"})).into_new_expense();

        assert_eq!(got, Err(Error::MissingCategory));
    }

    #[test]
    fn rejects_missing_category() {
        let got = form(json!({"amount": 1, "date": "2024-03-05"})).into_new_expense();

        assert_eq!(got, Err(Error::MissingCategory));
    }

    #[test]
    fn rejects_missing_date() {
        let got = form(json!({"amount": 1, "category": "Food"})).into_new_expense();

        assert_eq!(got, Err(Error::MissingDate));
    }

    #[test]
    fn rejects_unparseable_date() {
        let got = form(json!({"amount": 1, "category": "Food", "date": "2024-02-30"}))
            .into_new_expense();

        assert_eq!(got, Err(Error::InvalidDate("2024-02-30".to_owned())));
    }

    #[test]
    fn parses_rfc3339_date_times_as_utc_dates() {
        assert_eq!(
            parse_date("2024-03-05T00:00:00.000Z"),
            Ok(date!(2024 - 03 - 05))
        );
        assert_eq!(
            parse_date("2024-03-05T23:30:00-02:00"),
            Ok(date!(2024 - 03 - 06))
        );
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let got = form(json!({})).into_patch();

        assert_eq!(got, Ok(ExpensePatch::default()));
    }

    #[test]
    fn patch_distinguishes_null_description_from_absent() {
        let cleared = form(json!({"description": null})).into_patch().unwrap();
        let absent = form(json!({"amount": 3})).into_patch().unwrap();

        assert_eq!(cleared.description, Some(None));
        assert_eq!(absent.description, None);
        assert_eq!(absent.amount, Some(3.0));
    }

    #[test]
    fn patch_validates_present_fields() {
        assert_eq!(
            form(json!({"amount": -5})).into_patch(),
            Err(Error::NegativeAmount)
        );
        assert_eq!(
            form(json!({"category": ""})).into_patch(),
            Err(Error::MissingCategory)
        );
        assert_eq!(
            form(json!({"date": "not a date"})).into_patch(),
            Err(Error::InvalidDate("not a date".to_owned()))
        );
    }
}
