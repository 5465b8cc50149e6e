//! API index and fallback handlers.

use axum::Json;
use serde_json::{Value, json};

use crate::error::AppError;

/// Describe the API and list its endpoints.
pub async fn api_index() -> Json<Value> {
    Json(json!({
        "message": "TAARA Pet Adoption API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/health",
            "sms": {
                "sendGeneral": "POST /api/sms/send",
                "bulk": "POST /api/sms/bulk",
                "adoptionRequest": "POST /api/sms/adoption-request",
                "adoptionApproval": "POST /api/sms/adoption-approval",
                "adoptionRejection": "POST /api/sms/adoption-rejection",
                "donationConfirmation": "POST /api/sms/donation-confirmation",
                "volunteerWelcome": "POST /api/sms/volunteer-welcome",
                "appointmentReminder": "POST /api/sms/appointment-reminder",
                "verificationCode": "POST /api/sms/verification-code",
                "passwordReset": "POST /api/sms/password-reset",
                "petStatusUpdate": "POST /api/sms/pet-status-update",
                "validatePhone": "POST /api/sms/validate-phone"
            }
        }
    }))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
