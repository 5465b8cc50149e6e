//! Phone number validation and normalization.
//!
//! Recipients must be in international (E.164-like) format: a `+`, a
//! non-zero leading digit and 7 to 15 digits in total.

use regex::Regex;
use std::sync::LazyLock;

/// Country code applied by [`format_phone_number`] when the caller has none.
pub const DEFAULT_COUNTRY_CODE: &str = "+63";

// ASCII digits only; `\d` in the regex crate also matches other Unicode digits.
static INTERNATIONAL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{6,14}$").expect("phone pattern is valid"));

/// Whether `phone_number` is an acceptable SMS recipient.
///
/// # Examples
///
/// - `+639171234567` → true
/// - `09171234567` → false (no `+`)
/// - `+0123` → false (leading zero, too short)
pub fn validate_phone_number(phone_number: &str) -> bool {
    INTERNATIONAL_FORMAT.is_match(phone_number)
}

/// Convert a locally written number into international format.
///
/// # Process
///
/// 1. Drop every non-digit character
/// 2. Drop one leading `0` (trunk prefix)
/// 3. Prepend `country_code` unless the digits already start with it
///
/// The result is not validated; pass it through [`validate_phone_number`].
pub fn format_phone_number(phone_number: &str, country_code: &str) -> String {
    let digits: String = phone_number
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    let digits = digits.strip_prefix('0').unwrap_or(&digits);

    let code_digits = country_code.strip_prefix('+').unwrap_or(country_code);
    if digits.starts_with(code_digits) {
        format!("+{digits}")
    } else {
        format!("{country_code}{digits}")
    }
}
