//! Error types and HTTP error response handling.
//!
//! `SmsError` covers everything that can go wrong while dispatching a single
//! message. `AppError` is what HTTP handlers return and knows how to turn
//! itself into a JSON response.

use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::models::message::SendFailure;

/// Failure while validating or delivering an SMS.
#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    /// Recipient or message body is empty.
    #[error("Phone number and message are required")]
    MissingFields,

    /// Recipient is not in international format.
    #[error("Invalid phone number format. Use international format: +1234567890")]
    InvalidPhoneNumber,

    /// The provider rejected the request.
    ///
    /// `code` carries the provider's own error code (e.g. Twilio 21211) when
    /// the response body included one.
    #[error("{message}")]
    Provider { message: String, code: Option<i64> },

    /// The request never produced a usable response (connect error, timeout, bad JSON).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider base URL could not be combined into a request URL.
    #[error("Invalid provider endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

impl SmsError {
    /// Provider-specific error code, if any.
    pub fn code(&self) -> Option<i64> {
        match self {
            SmsError::Provider { code, .. } => *code,
            _ => None,
        }
    }
}

/// Application-wide HTTP error type.
///
/// # Status Code Mapping
///
/// - `RouteNotFound` → 404 Not Found
/// - everything else → 500 Internal Server Error
///
/// Validation problems and provider failures share the 500 status; callers
/// read the `error` message to tell them apart.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Dispatching the SMS failed.
    #[error("{message}")]
    SendFailed { message: String, code: Option<i64> },

    /// Request body is missing something the route needs.
    #[error("{0}")]
    InvalidRequest(String),

    /// No route matches the request path.
    #[error("Route not found")]
    RouteNotFound,
}

impl From<SendFailure> for AppError {
    fn from(failure: SendFailure) -> Self {
        AppError::SendFailed {
            message: failure.error,
            code: failure.code,
        }
    }
}

/// Undecodable JSON body (syntax error, wrong field type, missing content type).
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Undecodable form-encoded body.
impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "success": false,
///   "error": "Invalid phone number format. Use international format: +1234567890",
///   "code": 21211
/// }
/// ```
///
/// `code` is only present for provider failures that reported one.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::SendFailed { .. } | AppError::InvalidRequest(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let mut body = json!({
            "success": false,
            "error": self.to_string(),
        });
        if let AppError::SendFailed {
            code: Some(code), ..
        } = self
        {
            body["code"] = json!(code);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_exposes_code() {
        let err = SmsError::Provider {
            message: "The 'To' number is not a valid phone number.".to_string(),
            code: Some(21211),
        };
        assert_eq!(err.code(), Some(21211));
        assert_eq!(
            err.to_string(),
            "The 'To' number is not a valid phone number."
        );
        assert_eq!(SmsError::InvalidPhoneNumber.code(), None);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::RouteNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidRequest("Recipients are required".into())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::SendFailed {
                message: "boom".into(),
                code: None
            }
            .into_response()
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
