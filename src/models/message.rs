//! SMS delivery outcomes and the request/response types of the generic send routes.
//!
//! # Outcome shape
//!
//! Every dispatch produces an [`SmsOutcome`], which serializes to one flat
//! JSON object:
//!
//! ```json
//! { "success": true, "messageSid": "SM...", "status": "queued", "to": "+63...", "from": "+1..." }
//! { "success": true, "messageSid": "MOCK_1700000000000", "status": "sent", "to": "+63...", "from": "+1234567890", "mock": true }
//! { "success": false, "error": "Invalid phone number format. Use international format: +1234567890" }
//! ```

use serde::{Deserialize, Serialize, Serializer};

use crate::error::SmsError;

/// A message accepted by the provider (or by the mock path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Provider message identifier (`MOCK_<millis>` in mock mode)
    pub message_sid: String,

    /// Delivery status reported by the provider
    pub status: String,

    pub to: String,
    pub from: String,

    /// Set when the message was only logged
    pub mock: bool,
}

/// A message that could not be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendFailure {
    pub error: String,

    /// Provider-specific error code
    pub code: Option<i64>,
}

impl From<SmsError> for SendFailure {
    fn from(err: SmsError) -> Self {
        Self {
            code: err.code(),
            error: err.to_string(),
        }
    }
}

/// Result of a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmsOutcome {
    Sent(SentMessage),
    Failed(SendFailure),
}

impl SmsOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SmsOutcome::Sent(_))
    }

    pub fn message_sid(&self) -> Option<&str> {
        match self {
            SmsOutcome::Sent(sent) => Some(&sent.message_sid),
            SmsOutcome::Failed(_) => None,
        }
    }

    /// Convert into a `Result`, e.g. to use `?` in handlers.
    pub fn into_result(self) -> Result<SentMessage, SendFailure> {
        match self {
            SmsOutcome::Sent(sent) => Ok(sent),
            SmsOutcome::Failed(failure) => Err(failure),
        }
    }

    fn wire(&self) -> OutcomeBody<'_> {
        match self {
            SmsOutcome::Sent(sent) => OutcomeBody {
                success: true,
                message_sid: Some(&sent.message_sid),
                status: Some(&sent.status),
                to: Some(&sent.to),
                from: Some(&sent.from),
                mock: sent.mock,
                error: None,
                code: None,
            },
            SmsOutcome::Failed(failure) => OutcomeBody {
                success: false,
                message_sid: None,
                status: None,
                to: None,
                from: None,
                mock: false,
                error: Some(&failure.error),
                code: failure.code,
            },
        }
    }
}

impl From<Result<SentMessage, SmsError>> for SmsOutcome {
    fn from(result: Result<SentMessage, SmsError>) -> Self {
        match result {
            Ok(sent) => SmsOutcome::Sent(sent),
            Err(err) => SmsOutcome::Failed(err.into()),
        }
    }
}

/// Flat JSON view shared by single and per-recipient outcomes.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeBody<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_sid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    mock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<i64>,
}

impl Serialize for SmsOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.wire().serialize(serializer)
    }
}

/// Outcome for one recipient of a bulk send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientOutcome {
    /// Recipient exactly as supplied by the caller
    pub to: String,
    pub outcome: SmsOutcome,
}

/// Serializes like `SmsOutcome`, falling back to the supplied recipient
/// when the outcome itself carries no `to`.
impl Serialize for RecipientOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut body = self.outcome.wire();
        body.to = body.to.or(Some(self.to.as_str()));
        body.serialize(serializer)
    }
}

/// Aggregated result of a bulk send.
///
/// `results` preserves the order of the input recipients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSmsReport {
    pub total_sent: usize,
    pub total_failed: usize,
    pub results: Vec<RecipientOutcome>,
}

impl BulkSmsReport {
    pub fn from_results(results: Vec<RecipientOutcome>) -> Self {
        let total_sent = results.iter().filter(|r| r.outcome.is_success()).count();
        Self {
            total_sent,
            total_failed: results.len() - total_sent,
            results,
        }
    }
}

/// Request to send a free-form SMS.
///
/// # JSON Example
///
/// ```json
/// {
///   "to": "+639171234567",
///   "message": "Your pet is ready for pickup"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SendSmsRequest {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub message: String,
}

/// Response body for every single-recipient send route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsResponse {
    pub success: bool,
    pub message: String,
    pub message_sid: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub mock: bool,
}

impl From<SentMessage> for SendSmsResponse {
    fn from(sent: SentMessage) -> Self {
        Self {
            success: true,
            message: "SMS sent successfully".to_string(),
            message_sid: sent.message_sid,
            mock: sent.mock,
        }
    }
}

/// Request to send one message to many recipients.
#[derive(Debug, Deserialize)]
pub struct BulkSmsRequest {
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sent(to: &str) -> SmsOutcome {
        SmsOutcome::Sent(SentMessage {
            message_sid: "SM1".into(),
            status: "queued".into(),
            to: to.into(),
            from: "+15005550006".into(),
            mock: false,
        })
    }

    fn failed(err: SmsError) -> SmsOutcome {
        SmsOutcome::Failed(err.into())
    }

    #[test]
    fn test_sent_outcome_json() {
        let value = serde_json::to_value(sent("+639171234567")).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "messageSid": "SM1",
                "status": "queued",
                "to": "+639171234567",
                "from": "+15005550006"
            })
        );
    }

    #[test]
    fn test_failed_outcome_json_includes_code() {
        let outcome = SmsOutcome::Failed(SendFailure {
            error: "Authenticate".into(),
            code: Some(20003),
        });
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "error": "Authenticate", "code": 20003 })
        );
    }

    #[test]
    fn test_recipient_outcome_falls_back_to_supplied_number() {
        let failed = RecipientOutcome {
            to: "0917".into(),
            outcome: failed(SmsError::InvalidPhoneNumber),
        };
        let value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["to"], "0917");
        assert_eq!(value["success"], false);

        let ok = RecipientOutcome {
            to: "+639171234567".into(),
            outcome: sent("+639171234567"),
        };
        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["to"], "+639171234567");
        assert_eq!(value["messageSid"], "SM1");
    }

    #[test]
    fn test_bulk_report_counts() {
        let report = BulkSmsReport::from_results(vec![
            RecipientOutcome {
                to: "+639171234567".into(),
                outcome: sent("+639171234567"),
            },
            RecipientOutcome {
                to: "bad".into(),
                outcome: failed(SmsError::InvalidPhoneNumber),
            },
        ]);
        assert_eq!(report.total_sent, 1);
        assert_eq!(report.total_failed, 1);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["totalSent"], 1);
        assert_eq!(value["totalFailed"], 1);
        assert_eq!(value["results"].as_array().unwrap().len(), 2);
    }
}
