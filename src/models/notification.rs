//! Request bodies for the templated notification routes.
//!
//! Field names are camelCase on the wire. Every string field defaults to
//! empty so that a missing recipient surfaces as the dispatcher's
//! "Phone number and message are required" error instead of a JSON
//! rejection.

use std::fmt;

use serde::Deserialize;

/// A JSON value that callers send either as a string or a number.
///
/// Donation amounts and verification codes show up both ways
/// (`"500"` and `500`); both render the same in the message body.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl Default for TextOrNumber {
    fn default() -> Self {
        TextOrNumber::Text(String::new())
    }
}

impl fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrNumber::Text(text) => f.write_str(text),
            TextOrNumber::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Notify an administrator about a new adoption request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdoptionRequestNotice {
    pub admin_phone: String,
    pub adopter_name: String,
    pub pet_name: String,
    pub adopter_phone: String,
}

/// Tell an adopter their application was approved.
///
/// # JSON Example
///
/// ```json
/// {
///   "adopterPhone": "+639171234567",
///   "petName": "Bantay",
///   "organizationName": "TAARA",
///   "contactInfo": "0917 123 4567"
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdoptionApprovalRequest {
    pub adopter_phone: String,
    pub pet_name: String,
    pub organization_name: String,
    pub contact_info: String,
}

/// Tell an adopter their application was not approved.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdoptionRejectionRequest {
    pub adopter_phone: String,
    pub pet_name: String,
    pub organization_name: String,
    pub reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DonationConfirmationRequest {
    pub donor_phone: String,
    pub amount: TextOrNumber,
    pub organization_name: String,
    pub donor_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerWelcomeRequest {
    pub volunteer_phone: String,
    pub organization_name: String,
    pub volunteer_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentReminderRequest {
    pub user_phone: String,
    pub pet_name: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub location: String,
}

/// One-time code delivery, used for both verification and password reset.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeRequest {
    pub user_phone: String,
    pub code: TextOrNumber,
    pub user_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStatusUpdateRequest {
    pub user_phone: String,
    pub pet_name: String,
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_accepts_string_or_number() {
        let from_number: DonationConfirmationRequest =
            serde_json::from_str(r#"{"donorPhone":"+639171234567","amount":1500}"#).unwrap();
        assert_eq!(from_number.amount.to_string(), "1500");

        let from_text: DonationConfirmationRequest =
            serde_json::from_str(r#"{"amount":"1,500.50"}"#).unwrap();
        assert_eq!(from_text.amount.to_string(), "1,500.50");
        assert_eq!(from_text.donor_phone, "");
    }

    #[test]
    fn test_camel_case_fields() {
        let req: AppointmentReminderRequest = serde_json::from_str(
            r#"{
                "userPhone": "+639171234567",
                "petName": "Mingming",
                "appointmentDate": "2026-11-02",
                "appointmentTime": "10:00 AM",
                "location": "Quezon City"
            }"#,
        )
        .unwrap();
        assert_eq!(req.user_phone, "+639171234567");
        assert_eq!(req.appointment_time, "10:00 AM");
    }

    #[test]
    fn test_rejection_reason_is_optional() {
        let req: AdoptionRejectionRequest =
            serde_json::from_str(r#"{"adopterPhone":"+639171234567","petName":"Bantay"}"#)
                .unwrap();
        assert!(req.reason.is_none());
    }
}
