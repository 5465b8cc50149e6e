//! CORS policy for the admin dashboard.
//!
//! The dashboard is served from a single origin (`CLIENT_URL`) and sends
//! credentials, so the policy names that origin explicitly instead of using
//! a wildcard.

use axum::http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use tower_http::cors::CorsLayer;

/// Build the CORS layer allowing `client_url`.
///
/// # Errors
///
/// Returns an error if `client_url` is not a valid header value.
pub fn cors_layer(client_url: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(client_url)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
