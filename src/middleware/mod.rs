//! HTTP middleware components.
//!
//! Layers applied to every route in addition to request tracing.

/// Cross-origin policy for the admin dashboard
pub mod cors;
