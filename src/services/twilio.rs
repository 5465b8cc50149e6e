//! Twilio REST client.
//!
//! Sends messages with the Programmable Messaging API:
//!
//! ```text
//! POST {api_base}/2010-04-01/Accounts/{AccountSid}/Messages.json
//! Authorization: Basic base64(AccountSid:AuthToken)
//! Content-Type: application/x-www-form-urlencoded
//!
//! Body=...&From=...&To=...
//! ```
//!
//! A 2xx answer carries the created message resource. Anything else carries
//! Twilio's error document `{ "code": 21211, "message": "...", "status": 400 }`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::config::TwilioCredentials;
use crate::error::SmsError;
use crate::services::provider::{OutboundSms, ProviderMessage, SmsProvider};

/// Per-request timeout (prevents hanging on a slow provider)
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TwilioClient {
    http: reqwest::Client,
    account_sid: String,
    auth_token: String,
    messages_url: Url,
}

/// Subset of the Message resource we care about.
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
    status: String,
    to: String,
    from: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResource {
    code: Option<i64>,
    message: Option<String>,
}

impl TwilioClient {
    /// Build a client for `api_base` (normally `https://api.twilio.com`).
    ///
    /// # Errors
    ///
    /// - `InvalidEndpoint` if `api_base` is not a valid URL
    /// - `Http` if the HTTP client cannot be constructed
    pub fn new(credentials: &TwilioCredentials, api_base: &str) -> Result<Self, SmsError> {
        let mut base = Url::parse(api_base)?;
        // Without a trailing slash `join` would replace the last path segment
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let messages_url = base.join(&format!(
            "2010-04-01/Accounts/{}/Messages.json",
            credentials.account_sid
        ))?;

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            account_sid: credentials.account_sid.clone(),
            auth_token: credentials.auth_token.clone(),
            messages_url,
        })
    }
}

#[async_trait]
impl SmsProvider for TwilioClient {
    fn name(&self) -> &str {
        "twilio"
    }

    async fn create_message(&self, message: OutboundSms) -> Result<ProviderMessage, SmsError> {
        let response = self
            .http
            .post(self.messages_url.clone())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("Body", message.body.as_str()),
                ("From", message.from.as_str()),
                ("To", message.to.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let resource: MessageResource = response.json().await?;
            return Ok(ProviderMessage {
                sid: resource.sid,
                status: resource.status,
                to: resource.to,
                from: resource.from,
            });
        }

        // Error bodies are best effort; fall back to the HTTP status line
        let error: ErrorResource = response.json().await.unwrap_or_default();
        tracing::warn!(
            status = status.as_u16(),
            code = ?error.code,
            "Twilio rejected message"
        );

        Err(SmsError::Provider {
            message: error
                .message
                .unwrap_or_else(|| format!("Twilio request failed with status {status}")),
            code: error.code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn credentials() -> TwilioCredentials {
        TwilioCredentials {
            account_sid: "AC123".to_string(),
            auth_token: "secret".to_string(),
            phone_number: "+15005550006".to_string(),
        }
    }

    fn outbound() -> OutboundSms {
        OutboundSms {
            body: "Hello from the shelter".to_string(),
            from: "+15005550006".to_string(),
            to: "+639171234567".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_message_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/2010-04-01/Accounts/AC123/Messages.json"))
            .and(header_exists("authorization"))
            .and(body_string_contains("To=%2B639171234567"))
            .and(body_string_contains("From=%2B15005550006"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "sid": "SM0123456789abcdef0123456789abcdef",
                "status": "queued",
                "to": "+639171234567",
                "from": "+15005550006",
                "body": "Hello from the shelter"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = TwilioClient::new(&credentials(), &server.uri()).unwrap();
        let message = client.create_message(outbound()).await.unwrap();

        assert_eq!(message.sid, "SM0123456789abcdef0123456789abcdef");
        assert_eq!(message.status, "queued");
        assert_eq!(message.to, "+639171234567");
        assert_eq!(message.from, "+15005550006");
    }

    #[tokio::test]
    async fn test_create_message_surfaces_provider_code() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "code": 21211,
                "message": "The 'To' number +639171234567 is not a valid phone number.",
                "more_info": "https://www.twilio.com/docs/errors/21211",
                "status": 400
            })))
            .mount(&server)
            .await;

        let client = TwilioClient::new(&credentials(), &server.uri()).unwrap();
        let err = client.create_message(outbound()).await.unwrap_err();

        assert_eq!(err.code(), Some(21211));
        assert!(err.to_string().contains("is not a valid phone number"));
    }

    #[tokio::test]
    async fn test_create_message_without_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = TwilioClient::new(&credentials(), &server.uri()).unwrap();
        let err = client.create_message(outbound()).await.unwrap_err();

        assert_eq!(err.code(), None);
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_invalid_api_base() {
        let result = TwilioClient::new(&credentials(), "not a url");
        assert!(matches!(result, Err(SmsError::InvalidEndpoint(_))));
    }

    #[test]
    fn test_api_base_path_is_kept() {
        let expected = "https://proxy.example/twilio/2010-04-01/Accounts/AC123/Messages.json";
        for base in ["https://proxy.example/twilio", "https://proxy.example/twilio/"] {
            let client = TwilioClient::new(&credentials(), base).unwrap();
            assert_eq!(client.messages_url.as_str(), expected);
        }

        let client = TwilioClient::new(&credentials(), "https://api.twilio.com").unwrap();
        assert_eq!(
            client.messages_url.as_str(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
        );
    }
}
