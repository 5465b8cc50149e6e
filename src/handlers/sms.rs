//! SMS HTTP handlers.
//!
//! This module implements the notification endpoints:
//! - POST /api/sms/send - Free-form message
//! - POST /api/sms/bulk - One message, many recipients
//! - `POST /api/sms/{notification}` - Templated adoption workflow messages
//! - POST /api/sms/validate-phone - Normalize and check a number
//!
//! Bodies may be JSON or form-encoded; undecodable bodies answer 500 like
//! any other failure.
//!
//! Single-recipient routes answer 200 with `SendSmsResponse` or 500 with the
//! failure message.

use axum::{Json, extract::State};

use crate::{
    error::AppError,
    extract::Payload,
    models::{
        message::{BulkSmsReport, BulkSmsRequest, SendSmsRequest, SendSmsResponse, SmsOutcome},
        notification::{
            AdoptionApprovalRequest, AdoptionRejectionRequest, AdoptionRequestNotice,
            AppointmentReminderRequest, CodeRequest, DonationConfirmationRequest,
            PetStatusUpdateRequest, VolunteerWelcomeRequest,
        },
        phone::{ValidatePhoneRequest, ValidatePhoneResponse},
    },
    services::{
        phone::{DEFAULT_COUNTRY_CODE, format_phone_number, validate_phone_number},
        sms_service::SmsService,
    },
};

type SendResult = Result<Json<SendSmsResponse>, AppError>;

fn respond(outcome: SmsOutcome) -> SendResult {
    let sent = outcome.into_result()?;
    Ok(Json(sent.into()))
}

/// Send a free-form SMS.
///
/// # Request Body
///
/// ```json
/// {
///   "to": "+639171234567",
///   "message": "Your adoption interview is tomorrow at 10 AM"
/// }
/// ```
///
/// # Response (200)
///
/// ```json
/// {
///   "success": true,
///   "message": "SMS sent successfully",
///   "messageSid": "SM0123456789abcdef0123456789abcdef"
/// }
/// ```
pub async fn send_sms(
    State(sms): State<SmsService>,
    Payload(request): Payload<SendSmsRequest>,
) -> SendResult {
    respond(sms.send_sms(&request.to, &request.message).await)
}

/// Send one message to many recipients.
///
/// Always 200 once the request is accepted; per-recipient failures are
/// reported inside the body.
///
/// # Response (200)
///
/// ```json
/// {
///   "totalSent": 2,
///   "totalFailed": 1,
///   "results": [
///     { "success": true, "messageSid": "SM...", "status": "queued", "to": "+639171234567", "from": "+1..." },
///     { "success": false, "error": "Invalid phone number format. Use international format: +1234567890", "to": "0917" },
///     { "success": true, "messageSid": "SM...", "status": "queued", "to": "+639181234567", "from": "+1..." }
///   ]
/// }
/// ```
pub async fn send_bulk(
    State(sms): State<SmsService>,
    Payload(request): Payload<BulkSmsRequest>,
) -> Result<Json<BulkSmsReport>, AppError> {
    if request.recipients.is_empty() || request.message.is_empty() {
        return Err(AppError::InvalidRequest(
            "Recipients and message are required".to_string(),
        ));
    }

    let report = sms.send_bulk_sms(&request.recipients, &request.message).await;
    Ok(Json(report))
}

pub async fn adoption_request(
    State(sms): State<SmsService>,
    Payload(request): Payload<AdoptionRequestNotice>,
) -> SendResult {
    respond(
        sms.send_adoption_request_notification(
            &request.admin_phone,
            &request.adopter_name,
            &request.pet_name,
            &request.adopter_phone,
        )
        .await,
    )
}

pub async fn adoption_approval(
    State(sms): State<SmsService>,
    Payload(request): Payload<AdoptionApprovalRequest>,
) -> SendResult {
    respond(
        sms.send_adoption_approval(
            &request.adopter_phone,
            &request.pet_name,
            &request.organization_name,
            &request.contact_info,
        )
        .await,
    )
}

pub async fn adoption_rejection(
    State(sms): State<SmsService>,
    Payload(request): Payload<AdoptionRejectionRequest>,
) -> SendResult {
    respond(
        sms.send_adoption_rejection(
            &request.adopter_phone,
            &request.pet_name,
            &request.organization_name,
            request.reason.as_deref().unwrap_or_default(),
        )
        .await,
    )
}

pub async fn donation_confirmation(
    State(sms): State<SmsService>,
    Payload(request): Payload<DonationConfirmationRequest>,
) -> SendResult {
    respond(
        sms.send_donation_confirmation(
            &request.donor_phone,
            &request.amount.to_string(),
            &request.organization_name,
            &request.donor_name,
        )
        .await,
    )
}

pub async fn volunteer_welcome(
    State(sms): State<SmsService>,
    Payload(request): Payload<VolunteerWelcomeRequest>,
) -> SendResult {
    respond(
        sms.send_volunteer_welcome(
            &request.volunteer_phone,
            &request.organization_name,
            &request.volunteer_name,
        )
        .await,
    )
}

pub async fn appointment_reminder(
    State(sms): State<SmsService>,
    Payload(request): Payload<AppointmentReminderRequest>,
) -> SendResult {
    respond(
        sms.send_appointment_reminder(
            &request.user_phone,
            &request.pet_name,
            &request.appointment_date,
            &request.appointment_time,
            &request.location,
        )
        .await,
    )
}

pub async fn verification_code(
    State(sms): State<SmsService>,
    Payload(request): Payload<CodeRequest>,
) -> SendResult {
    respond(
        sms.send_verification_code(
            &request.user_phone,
            &request.code.to_string(),
            &request.user_name,
        )
        .await,
    )
}

pub async fn password_reset(
    State(sms): State<SmsService>,
    Payload(request): Payload<CodeRequest>,
) -> SendResult {
    respond(
        sms.send_password_reset_code(
            &request.user_phone,
            &request.code.to_string(),
            &request.user_name,
        )
        .await,
    )
}

pub async fn pet_status_update(
    State(sms): State<SmsService>,
    Payload(request): Payload<PetStatusUpdateRequest>,
) -> SendResult {
    respond(
        sms.send_pet_status_update(
            &request.user_phone,
            &request.pet_name,
            &request.status,
            &request.message,
        )
        .await,
    )
}

/// Normalize a number to international format and report whether it is usable.
///
/// # Request Body
///
/// ```json
/// { "phoneNumber": "0917 123 4567", "countryCode": "+63" }
/// ```
pub async fn validate_phone(
    Payload(request): Payload<ValidatePhoneRequest>,
) -> Result<Json<ValidatePhoneResponse>, AppError> {
    if request.phone_number.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Phone number is required".to_string(),
        ));
    }

    let country_code = request
        .country_code
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_COUNTRY_CODE);
    let formatted = format_phone_number(&request.phone_number, country_code);
    let valid = validate_phone_number(&formatted);

    Ok(Json(ValidatePhoneResponse {
        success: true,
        phone_number: request.phone_number,
        formatted,
        valid,
    }))
}
