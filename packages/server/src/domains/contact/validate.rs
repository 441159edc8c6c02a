use lazy_static::lazy_static;
use regex::Regex;

use crate::domains::contact::models::{
    ContactSubmission, RejectReason, RequiredField, ValidationResult,
};

/// Acknowledgment returned to the caller on an accepted submission.
pub const ACK_MESSAGE: &str = "Thank you for your message. We will get back to you soon.";

lazy_static! {
    // Minimal syntactic shape, not an RFC validator: something@something.something
    // with no whitespace or extra @ in any segment.
    static ref EMAIL_SHAPE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Validate a submission against the required-field and email-format rules.
///
/// Pure: no side effects, no trimming. An empty string counts as missing.
/// The email shape is only checked once all required fields are present.
pub fn validate(submission: &ContactSubmission) -> ValidationResult {
    let mut missing = Vec::new();
    if is_blank(&submission.name) {
        missing.push(RequiredField::Name);
    }
    if is_blank(&submission.email) {
        missing.push(RequiredField::Email);
    }
    if is_blank(&submission.message) {
        missing.push(RequiredField::Message);
    }
    if !missing.is_empty() {
        return ValidationResult::Rejected(RejectReason::MissingFields(missing));
    }

    let email = submission.email.as_deref().unwrap_or_default();
    if !EMAIL_SHAPE.is_match(email) {
        return ValidationResult::Rejected(RejectReason::InvalidEmailFormat);
    }

    ValidationResult::Accepted
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
