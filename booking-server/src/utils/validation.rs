//! Input validation helpers
//!
//! Structural rules (lengths, email syntax, slot range) live on the request
//! DTOs as `validator` derives. The helpers here cover what a derive cannot:
//! whitespace-only text and input normalization.

use crate::utils::AppError;

/// Validate that a required string is non-empty after trimming and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: u64) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty"))
            .with_detail("field", field));
    }
    let len = value.chars().count() as u64;
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Canonical form of an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
