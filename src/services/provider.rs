//! Messaging provider abstraction.
//!
//! The SMS service only needs one operation from a provider: create (send) a
//! message. Keeping it behind a trait lets the live Twilio client and test
//! doubles share the same dispatch path.

use async_trait::async_trait;

use crate::error::SmsError;

/// Message handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundSms {
    pub body: String,
    pub from: String,
    pub to: String,
}

/// Provider's view of an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMessage {
    pub sid: String,
    pub status: String,
    pub to: String,
    pub from: String,
}

#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Submit a message for delivery.
    async fn create_message(&self, message: OutboundSms) -> Result<ProviderMessage, SmsError>;
}
