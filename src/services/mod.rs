//! Business logic services.
//!
//! Services contain the SMS dispatch logic separated from HTTP handlers:
//! validation, message templates, provider integration and bulk pacing.

pub mod phone;
pub mod provider;
pub mod sms_service;
pub mod templates;
pub mod twilio;
