use serde::{Deserialize, Serialize};

pub use models::lead::NewLead;

pub const SUCCESS_MESSAGE: &str = "Thank you for your interest! We will contact you soon.";
pub const INSERT_FAILED_MESSAGE: &str = "Failed to submit your information. Please try again.";

/// Contact form payload as submitted. Every field defaults to empty so that
/// missing fields are reported by validation rather than by deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// How a submission ended; drives the HTTP status, not serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadStatus {
    Accepted,
    Invalid,
    Failed,
}

/// Result handed back to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    #[serde(skip)]
    pub status: LeadStatus,
}

impl LeadOutcome {
    pub fn accepted() -> Self {
        Self { success: true, message: SUCCESS_MESSAGE.into(), errors: Vec::new(), status: LeadStatus::Accepted }
    }

    /// The first field message doubles as the headline message.
    pub fn invalid(errors: Vec<FieldError>) -> Self {
        let message = errors
            .first()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "Invalid submission.".into());
        Self { success: false, message, errors, status: LeadStatus::Invalid }
    }

    pub fn failed() -> Self {
        Self { success: false, message: INSERT_FAILED_MESSAGE.into(), errors: Vec::new(), status: LeadStatus::Failed }
    }
}
