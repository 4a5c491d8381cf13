//! Email address validation for customer accounts.

use regex::Regex;
use std::sync::LazyLock;

use crate::server::error::AppError;

/// One `@` with a non-empty local part and a dotted domain, no whitespace.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern")
});

/// Trims surrounding whitespace and checks the address shape.
///
/// # Returns
/// - `Ok(String)` - Trimmed address
/// - `Err(AppError::BadRequest)` - Not an email address
pub fn validate_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim();

    if !EMAIL_PATTERN.is_match(email) {
        return Err(AppError::BadRequest(format!(
            "Invalid email address: {}",
            raw
        )));
    }

    Ok(email.to_string())
}
