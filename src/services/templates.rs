//! Message bodies for every notification type.
//!
//! Each function returns the complete SMS text. Supplied values are inserted
//! verbatim and every message ends with the app signature line.

const SIGNATURE: &str = "- Pet Adoption App";

pub fn adoption_request(adopter_name: &str, pet_name: &str, adopter_phone: &str) -> String {
    format!(
        "🐾 NEW ADOPTION REQUEST\n\
         \n\
         Adopter: {adopter_name}\n\
         Pet: {pet_name}\n\
         Contact: {adopter_phone}\n\
         \n\
         Please review the request in your admin dashboard.\n\
         \n\
         {SIGNATURE}"
    )
}

pub fn adoption_approval(pet_name: &str, organization_name: &str, contact_info: &str) -> String {
    format!(
        "🎉 CONGRATULATIONS!\n\
         \n\
         Your adoption request for {pet_name} has been APPROVED by {organization_name}!\n\
         \n\
         We're excited to help you welcome {pet_name} to your family. \
         Our team will contact you soon with the next steps.\n\
         \n\
         Contact us: {contact_info}\n\
         \n\
         {SIGNATURE}"
    )
}

/// An empty `reason` leaves out the "Reason:" paragraph.
pub fn adoption_rejection(pet_name: &str, organization_name: &str, reason: &str) -> String {
    let reason_text = if reason.is_empty() {
        String::new()
    } else {
        format!("\n\nReason: {reason}")
    };

    format!(
        "📋 ADOPTION APPLICATION UPDATE\n\
         \n\
         Thank you for your interest in adopting {pet_name} from {organization_name}.\n\
         \n\
         Unfortunately, your application was not approved at this time.{reason_text}\n\
         \n\
         Please don't be discouraged! Feel free to browse other available pets \
         and submit another application.\n\
         \n\
         {SIGNATURE}"
    )
}

pub fn donation_confirmation(amount: &str, organization_name: &str, donor_name: &str) -> String {
    format!(
        "❤️ DONATION CONFIRMED\n\
         \n\
         Dear {donor_name},\n\
         \n\
         Thank you for your generous donation of ${amount} to {organization_name}!\n\
         \n\
         Your support helps us:\n\
         • Feed and care for rescued animals\n\
         • Provide medical treatment\n\
         • Find loving homes for pets in need\n\
         \n\
         Every contribution makes a difference!\n\
         \n\
         {SIGNATURE}"
    )
}

pub fn volunteer_welcome(organization_name: &str, volunteer_name: &str) -> String {
    format!(
        "🌟 WELCOME TO OUR TEAM!\n\
         \n\
         Hi {volunteer_name},\n\
         \n\
         Thank you for joining {organization_name} as a volunteer!\n\
         \n\
         We're thrilled to have you on board. You'll receive updates about:\n\
         • Volunteer opportunities\n\
         • Special events\n\
         • Ways to help our furry friends\n\
         \n\
         Together, we can make a difference!\n\
         \n\
         {SIGNATURE}"
    )
}

pub fn appointment_reminder(
    pet_name: &str,
    appointment_date: &str,
    appointment_time: &str,
    location: &str,
) -> String {
    format!(
        "📅 APPOINTMENT REMINDER\n\
         \n\
         Pet: {pet_name}\n\
         Date: {appointment_date}\n\
         Time: {appointment_time}\n\
         Location: {location}\n\
         \n\
         We're looking forward to seeing you! Please arrive 10 minutes early.\n\
         \n\
         To reschedule, please contact us.\n\
         \n\
         {SIGNATURE}"
    )
}

pub fn verification_code(code: &str, user_name: &str) -> String {
    format!(
        "🔐 VERIFICATION CODE\n\
         \n\
         Hi {user_name},\n\
         \n\
         Your verification code is: {code}\n\
         \n\
         This code will expire in 10 minutes.\n\
         \n\
         Do not share this code with anyone.\n\
         \n\
         {SIGNATURE}"
    )
}

pub fn password_reset_code(code: &str, user_name: &str) -> String {
    format!(
        "🔑 PASSWORD RESET\n\
         \n\
         Hi {user_name},\n\
         \n\
         Your password reset code is: {code}\n\
         \n\
         This code will expire in 15 minutes.\n\
         \n\
         If you didn't request this, please ignore this message.\n\
         \n\
         {SIGNATURE}"
    )
}

pub fn pet_status_update(pet_name: &str, status: &str, message: &str) -> String {
    format!(
        "🐕 PET UPDATE: {pet_name}\n\
         \n\
         Status: {status}\n\
         \n\
         {message}\n\
         \n\
         {SIGNATURE}"
    )
}
