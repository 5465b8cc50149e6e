//! Pet adoption SMS notification service.
//!
//! Dispatches transactional SMS (adoption decisions, donation receipts,
//! verification codes, reminders) for the TAARA pet adoption dashboard
//! through Twilio, or logs them in mock mode when Twilio is not configured.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Provider**: Twilio REST API via reqwest, behind the `SmsProvider` trait
//! - **Format**: JSON requests/responses with camelCase fields

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
