use serde::{Deserialize, Serialize};

/// One contact-form payload received by the server.
///
/// Transient: validated, logged, and discarded. Fields arrive as optional so
/// that an absent field reaches the validator instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// The fields a submission must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Message,
}

impl RequiredField {
    pub fn as_str(self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Message => "message",
        }
    }
}

/// Outcome of validating one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Accepted,
    Rejected(RejectReason),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// The absent required fields, in name, email, message order.
    MissingFields(Vec<RequiredField>),
    InvalidEmailFormat,
}
