//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives the JSON request body
//! 2. Calls into the SMS service
//! 3. Returns a JSON response and status code

/// Health check endpoint
pub mod health;
/// API index and 404 fallback
pub mod index;
/// SMS dispatch endpoints
pub mod sms;
