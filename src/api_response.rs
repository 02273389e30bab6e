//! The JSON envelope shared by every API response.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The body of every JSON response: `{ success, data?, message? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,

    /// The payload for successful requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// A human readable status or error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Attach a message to the response.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// A successful response with only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    /// A failed response with an error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ApiResponse;

    #[test]
    fn omits_empty_fields() {
        let got = serde_json::to_value(ApiResponse::message("done")).unwrap();

        assert_eq!(got, json!({"success": true, "message": "done"}));
    }

    #[test]
    fn includes_data_and_message() {
        let got = serde_json::to_value(ApiResponse::data(vec![1, 2]).with_message("two")).unwrap();

        assert_eq!(got, json!({"success": true, "data": [1, 2], "message": "two"}));
    }
}
