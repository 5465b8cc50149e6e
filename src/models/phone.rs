//! Phone number validation request/response types.

use serde::{Deserialize, Serialize};

/// Request to normalize and validate a phone number.
///
/// # JSON Example
///
/// ```json
/// {
///   "phoneNumber": "0917 123 4567",
///   "countryCode": "+63"
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePhoneRequest {
    #[serde(default)]
    pub phone_number: String,

    /// Defaults to `+63` when omitted
    pub country_code: Option<String>,
}

/// # JSON Example
///
/// ```json
/// {
///   "success": true,
///   "phoneNumber": "0917 123 4567",
///   "formatted": "+639171234567",
///   "valid": true
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatePhoneResponse {
    pub success: bool,

    /// Number as supplied
    pub phone_number: String,

    /// Number in international format
    pub formatted: String,

    /// Whether `formatted` is an acceptable SMS recipient
    pub valid: bool,
}
