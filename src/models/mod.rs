//! Data models for the SMS API.
//!
//! This module contains the delivery outcomes produced by the SMS service and
//! the JSON request/response bodies of the HTTP routes.

/// Delivery outcomes, free-form and bulk send bodies
pub mod message;
/// Templated notification request bodies
pub mod notification;
/// Phone number validation bodies
pub mod phone;
