//! SMS dispatch service - the notification core.
//!
//! This service handles:
//! - Recipient and body validation
//! - Live delivery through an [`SmsProvider`] or log-only mock delivery
//! - Templated notifications for the adoption workflow
//! - Paced bulk sends
//!
//! # Mock mode
//!
//! When Twilio credentials are incomplete the service is built without a
//! provider. Messages are logged and reported as sent with a synthesized
//! `MOCK_<millis>` id. The mode is fixed for the lifetime of the service.
//!
//! # Failure reporting
//!
//! Dispatch never returns `Err`. Every failure (bad input, provider
//! rejection, network error) comes back as [`SmsOutcome::Failed`] so callers
//! decide whether to retry.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::SmsError;
use crate::models::message::{BulkSmsReport, RecipientOutcome, SentMessage, SmsOutcome};
use crate::services::phone::validate_phone_number;
use crate::services::provider::{OutboundSms, SmsProvider};
use crate::services::templates;
use crate::services::twilio::TwilioClient;

/// Sender reported by mock deliveries.
pub const MOCK_FROM_NUMBER: &str = "+1234567890";

/// Pause between consecutive bulk sends (1 SMS per second on the Twilio free tier)
pub const BULK_SEND_INTERVAL: Duration = Duration::from_secs(1);

/// Notification dispatcher shared by all HTTP handlers.
///
/// Cloning is cheap; clones share the same provider.
#[derive(Clone)]
pub struct SmsService {
    provider: Option<Arc<dyn SmsProvider>>,
    from_number: String,
    bulk_interval: Duration,
}

impl SmsService {
    /// Build the service from configuration.
    ///
    /// Live mode requires all three Twilio credentials; otherwise the service
    /// runs in mock mode. Credentials paired with an unusable
    /// `TWILIO_API_BASE` also fall back to mock mode, with an error logged.
    pub fn from_config(config: &Config) -> Self {
        let Some(credentials) = config.twilio_credentials() else {
            tracing::info!("SMS service running in mock mode");
            return Self::mock();
        };

        match TwilioClient::new(&credentials, &config.twilio_api_base) {
            Ok(client) => {
                tracing::info!("SMS service enabled with Twilio");
                Self::with_provider(Arc::new(client), credentials.phone_number)
            }
            Err(err) => {
                tracing::error!(
                    api_base = %config.twilio_api_base,
                    "Failed to build Twilio client, falling back to mock mode: {}",
                    err
                );
                Self::mock()
            }
        }
    }

    /// Service that logs messages instead of sending them.
    pub fn mock() -> Self {
        Self {
            provider: None,
            from_number: MOCK_FROM_NUMBER.to_string(),
            bulk_interval: BULK_SEND_INTERVAL,
        }
    }

    /// Service that delivers through `provider`, sending from `from_number`.
    pub fn with_provider(provider: Arc<dyn SmsProvider>, from_number: impl Into<String>) -> Self {
        Self {
            provider: Some(provider),
            from_number: from_number.into(),
            bulk_interval: BULK_SEND_INTERVAL,
        }
    }

    /// Override the pause between bulk sends.
    pub fn with_bulk_interval(mut self, interval: Duration) -> Self {
        self.bulk_interval = interval;
        self
    }

    /// Whether messages go to a real provider.
    pub fn is_live(&self) -> bool {
        self.provider.is_some()
    }

    pub fn from_number(&self) -> &str {
        &self.from_number
    }

    /// Send a single SMS.
    ///
    /// # Validation
    ///
    /// - `to` and `message` must be non-empty
    /// - `to` must be in international format (`+639171234567`)
    ///
    /// Invalid input fails without contacting the provider.
    pub async fn send_sms(&self, to: &str, message: &str) -> SmsOutcome {
        let result = self.dispatch(to, message).await;
        if let Err(ref err) = result {
            tracing::error!(to, code = ?err.code(), "Error sending SMS: {}", err);
        }
        result.into()
    }

    async fn dispatch(&self, to: &str, message: &str) -> Result<SentMessage, SmsError> {
        if to.is_empty() || message.is_empty() {
            return Err(SmsError::MissingFields);
        }
        if !validate_phone_number(to) {
            return Err(SmsError::InvalidPhoneNumber);
        }

        let Some(provider) = &self.provider else {
            tracing::info!(to, from = %self.from_number, message, "MOCK SMS");
            return Ok(SentMessage {
                message_sid: format!("MOCK_{}", chrono::Utc::now().timestamp_millis()),
                status: "sent".to_string(),
                to: to.to_string(),
                from: self.from_number.clone(),
                mock: true,
            });
        };

        let created = provider
            .create_message(OutboundSms {
                body: message.to_string(),
                from: self.from_number.clone(),
                to: to.to_string(),
            })
            .await?;

        tracing::info!(
            provider = provider.name(),
            sid = %created.sid,
            status = %created.status,
            "SMS sent successfully"
        );

        Ok(SentMessage {
            message_sid: created.sid,
            status: created.status,
            to: created.to,
            from: created.from,
            mock: false,
        })
    }

    /// Notify an administrator that someone applied to adopt a pet.
    pub async fn send_adoption_request_notification(
        &self,
        admin_phone: &str,
        adopter_name: &str,
        pet_name: &str,
        adopter_phone: &str,
    ) -> SmsOutcome {
        let body = templates::adoption_request(adopter_name, pet_name, adopter_phone);
        self.send_sms(admin_phone, &body).await
    }

    pub async fn send_adoption_approval(
        &self,
        adopter_phone: &str,
        pet_name: &str,
        organization_name: &str,
        contact_info: &str,
    ) -> SmsOutcome {
        let body = templates::adoption_approval(pet_name, organization_name, contact_info);
        self.send_sms(adopter_phone, &body).await
    }

    /// `reason` may be empty.
    pub async fn send_adoption_rejection(
        &self,
        adopter_phone: &str,
        pet_name: &str,
        organization_name: &str,
        reason: &str,
    ) -> SmsOutcome {
        let body = templates::adoption_rejection(pet_name, organization_name, reason);
        self.send_sms(adopter_phone, &body).await
    }

    pub async fn send_donation_confirmation(
        &self,
        donor_phone: &str,
        amount: &str,
        organization_name: &str,
        donor_name: &str,
    ) -> SmsOutcome {
        let body = templates::donation_confirmation(amount, organization_name, donor_name);
        self.send_sms(donor_phone, &body).await
    }

    pub async fn send_volunteer_welcome(
        &self,
        volunteer_phone: &str,
        organization_name: &str,
        volunteer_name: &str,
    ) -> SmsOutcome {
        let body = templates::volunteer_welcome(organization_name, volunteer_name);
        self.send_sms(volunteer_phone, &body).await
    }

    pub async fn send_appointment_reminder(
        &self,
        user_phone: &str,
        pet_name: &str,
        appointment_date: &str,
        appointment_time: &str,
        location: &str,
    ) -> SmsOutcome {
        let body =
            templates::appointment_reminder(pet_name, appointment_date, appointment_time, location);
        self.send_sms(user_phone, &body).await
    }

    pub async fn send_verification_code(
        &self,
        user_phone: &str,
        code: &str,
        user_name: &str,
    ) -> SmsOutcome {
        let body = templates::verification_code(code, user_name);
        self.send_sms(user_phone, &body).await
    }

    pub async fn send_password_reset_code(
        &self,
        user_phone: &str,
        code: &str,
        user_name: &str,
    ) -> SmsOutcome {
        let body = templates::password_reset_code(code, user_name);
        self.send_sms(user_phone, &body).await
    }

    pub async fn send_pet_status_update(
        &self,
        user_phone: &str,
        pet_name: &str,
        status: &str,
        message: &str,
    ) -> SmsOutcome {
        let body = templates::pet_status_update(pet_name, status, message);
        self.send_sms(user_phone, &body).await
    }

    /// Send the same message to every recipient, one at a time.
    ///
    /// # Behavior
    ///
    /// - Recipients are processed in order, pausing `BULK_SEND_INTERVAL`
    ///   between consecutive sends
    /// - A failure for one recipient does not stop the loop
    /// - `results` is in input order
    pub async fn send_bulk_sms(&self, recipients: &[String], message: &str) -> BulkSmsReport {
        let mut results = Vec::with_capacity(recipients.len());

        for (index, recipient) in recipients.iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.bulk_interval).await;
            }

            let outcome = self.send_sms(recipient, message).await;
            results.push(RecipientOutcome {
                to: recipient.clone(),
                outcome,
            });
        }

        let report = BulkSmsReport::from_results(results);
        tracing::info!(
            sent = report.total_sent,
            failed = report.total_failed,
            "Bulk SMS results"
        );
        report
    }
}
