//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `TWILIO_ACCOUNT_SID` (optional): Twilio account identifier
/// - `TWILIO_AUTH_TOKEN` (optional): Twilio auth token
/// - `TWILIO_PHONE_NUMBER` (optional): sender number registered with Twilio
/// - `TWILIO_API_BASE` (optional): Twilio REST base URL, defaults to `https://api.twilio.com`
/// - `PORT` (optional): HTTP server port, defaults to 5000
/// - `CLIENT_URL` (optional): origin allowed by CORS, defaults to `http://localhost:3000`
///
/// The three Twilio credentials must all be present for live delivery.
/// Anything less runs the SMS service in mock mode.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,
    pub twilio_phone_number: Option<String>,

    #[serde(default = "default_twilio_api_base")]
    pub twilio_api_base: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_client_url")]
    pub client_url: String,
}

/// Credentials needed to talk to Twilio.
#[derive(Debug, Clone)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: String,
    pub phone_number: String,
}

/// Default port if PORT environment variable is not set.
fn default_port() -> u16 {
    5000
}

fn default_client_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_twilio_api_base() -> String {
    "https://api.twilio.com".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            twilio_account_sid: None,
            twilio_auth_token: None,
            twilio_phone_number: None,
            twilio_api_base: default_twilio_api_base(),
            port: default_port(),
            client_url: default_client_url(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed into
    /// expected types (e.g. a non-numeric `PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: twilio_auth_token -> TWILIO_AUTH_TOKEN
        envy::from_env::<Config>()
    }

    /// Twilio credentials, or `None` when any of the three is missing or blank.
    pub fn twilio_credentials(&self) -> Option<TwilioCredentials> {
        Some(TwilioCredentials {
            account_sid: non_blank(&self.twilio_account_sid)?,
            auth_token: non_blank(&self.twilio_auth_token)?,
            phone_number: non_blank(&self.twilio_phone_number)?,
        })
    }

    /// Log which Twilio settings are present without revealing secrets.
    pub fn log_twilio_status(&self) {
        let status = |value: &Option<String>| {
            if non_blank(value).is_some() {
                "set"
            } else {
                "missing"
            }
        };

        tracing::info!(
            account_sid = status(&self.twilio_account_sid),
            auth_token = status(&self.twilio_auth_token),
            phone_number = self
                .twilio_phone_number
                .as_deref()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or("missing"),
            mode = if self.twilio_credentials().is_some() {
                "live"
            } else {
                "mock"
            },
            "Twilio configuration status"
        );
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .filter(|v| !v.trim().is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_credentials(sid: &str, token: &str, number: &str) -> Config {
        Config {
            twilio_account_sid: Some(sid.to_string()),
            twilio_auth_token: Some(token.to_string()),
            twilio_phone_number: Some(number.to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_all_credentials_present_selects_live() {
        let config = with_credentials("AC123", "secret", "+15005550006");
        let creds = config.twilio_credentials().unwrap();
        assert_eq!(creds.account_sid, "AC123");
        assert_eq!(creds.auth_token, "secret");
        assert_eq!(creds.phone_number, "+15005550006");
    }

    #[test]
    fn test_missing_or_blank_credential_selects_mock() {
        assert!(Config::default().twilio_credentials().is_none());
        assert!(
            with_credentials("AC123", "", "+15005550006")
                .twilio_credentials()
                .is_none()
        );

        let mut config = with_credentials("AC123", "secret", "+15005550006");
        config.twilio_phone_number = None;
        assert!(config.twilio_credentials().is_none());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.client_url, "http://localhost:3000");
        assert_eq!(config.twilio_api_base, "https://api.twilio.com");
    }
}
