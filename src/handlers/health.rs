//! Health check endpoint for service monitoring.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::sms_service::SmsService;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub success: bool,

    pub message: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,

    /// Whether SMS goes to Twilio (false in mock mode)
    pub twilio_configured: bool,
}

/// Health check handler.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "success": true,
///   "message": "Server is running",
///   "timestamp": "2026-10-18T09:00:00Z",
///   "twilioConfigured": false
/// }
/// ```
pub async fn health_check(State(sms): State<SmsService>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "Server is running".to_string(),
        timestamp: Utc::now(),
        twilio_configured: sms.is_live(),
    })
}
