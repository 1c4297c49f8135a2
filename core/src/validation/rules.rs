//! Free-text rules shared by the leave form and the approval queue.

use validator::ValidationError;

/// Longest note or rejection reason accepted, in characters.
pub const MAX_TEXT_LENGTH: usize = 500;

/// Trims free text, mapping blank input to `None`.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validates a reviewer's rejection reason.
///
/// Requirements:
/// - Not blank once trimmed
/// - At most 500 characters
pub fn validate_rejection_reason(reason: &str) -> Result<(), ValidationError> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("rejection_reason_required"));
    }
    if trimmed.chars().count() > MAX_TEXT_LENGTH {
        return Err(ValidationError::new("rejection_reason_too_long"));
    }
    Ok(())
}
