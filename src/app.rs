//! HTTP router assembly.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers, services::sms_service::SmsService};

/// Build the application router.
///
/// # Routes
///
/// - `GET /` - API index
/// - `GET /api/health` - Health check
/// - `POST /api/sms/...` - SMS dispatch (see [`handlers::sms`])
/// - anything else - 404 JSON
pub fn build_router(sms: SmsService, cors: CorsLayer) -> Router {
    let sms_routes = Router::new()
        .route("/send", post(handlers::sms::send_sms))
        .route("/bulk", post(handlers::sms::send_bulk))
        .route("/adoption-request", post(handlers::sms::adoption_request))
        .route("/adoption-approval", post(handlers::sms::adoption_approval))
        .route("/adoption-rejection", post(handlers::sms::adoption_rejection))
        .route(
            "/donation-confirmation",
            post(handlers::sms::donation_confirmation),
        )
        .route("/volunteer-welcome", post(handlers::sms::volunteer_welcome))
        .route(
            "/appointment-reminder",
            post(handlers::sms::appointment_reminder),
        )
        .route("/verification-code", post(handlers::sms::verification_code))
        .route("/password-reset", post(handlers::sms::password_reset))
        .route("/pet-status-update", post(handlers::sms::pet_status_update))
        .route("/validate-phone", post(handlers::sms::validate_phone));

    Router::new()
        .route("/", get(handlers::index::api_index))
        .route("/api/health", get(handlers::health::health_check))
        .nest("/api/sms", sms_routes)
        .fallback(handlers::index::not_found)
        .layer(cors)
        // Log every request with method, path, status and latency
        .layer(TraceLayer::new_for_http())
        .with_state(sms)
}
