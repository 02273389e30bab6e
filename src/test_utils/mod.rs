#![allow(missing_docs)]

pub(crate) mod http;
pub(crate) mod store;

pub(crate) use http::{assert_content_type, get_header, parse_json_body};
pub(crate) use store::{FailingExpenseStore, must_create_test_state};
