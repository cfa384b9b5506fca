use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, instrument};

use super::domain::{FieldError, LeadInput, LeadOutcome, NewLead};
use super::repository::LeadRepository;
use models::errors::ModelError;

/// Contact form handler independent of web framework.
pub struct LeadService<R: LeadRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: LeadRepository + ?Sized> LeadService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate and store one lead. Never returns an error: every failure
    /// becomes an unsuccessful [`LeadOutcome`] with a user-facing message.
    ///
    /// # Examples
    /// ```
    /// use service::leads::{LeadService, domain::LeadInput, repository::mock::MockLeadRepository};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockLeadRepository::default());
    /// let svc = LeadService::new(repo.clone());
    /// let input = LeadInput { name: "Ada".into(), email: "ada@example.com".into(), ..Default::default() };
    /// let outcome = tokio_test::block_on(svc.submit(input));
    /// assert!(outcome.success);
    /// assert_eq!(repo.rows().len(), 1);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn submit(&self, input: LeadInput) -> LeadOutcome {
        let lead = match validate(input) {
            Ok(lead) => lead,
            Err(errors) => {
                info!(fields = ?errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(), "lead_rejected");
                return LeadOutcome::invalid(errors);
            }
        };

        let created_at = Utc::now();
        match self.repo.insert(lead, created_at).await {
            Ok(id) => {
                info!(lead_id = %id, %created_at, "lead_submitted");
                LeadOutcome::accepted()
            }
            Err(e) => {
                error!(error = %e, "error submitting lead");
                LeadOutcome::failed()
            }
        }
    }
}

/// Apply the contact form schema: name and email required, the rest optional.
/// Strings are trimmed and empty optional fields become `None`.
pub fn validate(input: LeadInput) -> Result<NewLead, Vec<FieldError>> {
    let name = input.name.trim().to_string();
    let email = input.email.trim().to_string();
    let mut errors = Vec::new();

    if let Err(e) = models::lead::validate_name(&name) {
        errors.push(field_error("name", e));
    }
    if let Err(e) = models::lead::validate_email(&email) {
        errors.push(field_error("email", e));
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewLead {
        name,
        email,
        phone: non_empty(input.phone),
        company: non_empty(input.company),
        message: non_empty(input.message),
    })
}

fn field_error(field: &str, e: ModelError) -> FieldError {
    let message = match e {
        ModelError::Validation(msg) => msg,
        other => other.to_string(),
    };
    FieldError { field: field.into(), message }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leads::domain::{LeadStatus, INSERT_FAILED_MESSAGE, SUCCESS_MESSAGE};
    use crate::leads::repository::mock::MockLeadRepository;
    use models::lead::{INVALID_EMAIL, NAME_TOO_SHORT};

    fn input(name: &str, email: &str) -> LeadInput {
        LeadInput { name: name.into(), email: email.into(), ..Default::default() }
    }

    #[tokio::test]
    async fn invalid_email_is_rejected_without_insert() {
        let repo = Arc::new(MockLeadRepository::default());
        let svc = LeadService::new(repo.clone());
        let out = svc.submit(input("Grace Hopper", "grace-at-example")).await;
        assert!(!out.success);
        assert_eq!(out.status, LeadStatus::Invalid);
        assert_eq!(out.message, INVALID_EMAIL);
        assert_eq!(out.errors.len(), 1);
        assert_eq!(out.errors[0].field, "email");
        assert!(repo.rows().is_empty());
    }

    #[tokio::test]
    async fn required_fields_only_inserts_one_row_with_server_timestamp() {
        let repo = Arc::new(MockLeadRepository::default());
        let svc = LeadService::new(repo.clone());
        let before = Utc::now();
        let out = svc.submit(input("Grace Hopper", "grace@example.com")).await;
        let after = Utc::now();

        assert!(out.success);
        assert_eq!(out.status, LeadStatus::Accepted);
        assert_eq!(out.message, SUCCESS_MESSAGE);
        let rows = repo.rows();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].created_at >= before && rows[0].created_at <= after);
        assert_eq!(rows[0].lead.phone, None);
        assert_eq!(rows[0].lead.company, None);
        assert_eq!(rows[0].lead.message, None);
    }

    #[tokio::test]
    async fn insert_failure_becomes_failure_outcome() {
        let repo = Arc::new(MockLeadRepository::default());
        repo.fail_inserts();
        let svc = LeadService::new(repo.clone());
        let out = svc.submit(input("Grace Hopper", "grace@example.com")).await;
        assert!(!out.success);
        assert_eq!(out.status, LeadStatus::Failed);
        assert_eq!(out.message, INSERT_FAILED_MESSAGE);
        assert!(repo.rows().is_empty());
    }

    #[test]
    fn missing_name_and_email_both_reported() {
        let errors = validate(LeadInput::default()).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email"]);
        assert_eq!(errors[0].message, NAME_TOO_SHORT);
        assert_eq!(LeadOutcome::invalid(errors).message, NAME_TOO_SHORT);
    }

    #[test]
    fn optional_fields_are_trimmed_and_blank_dropped() {
        let lead = validate(LeadInput {
            name: "  Ada Lovelace ".into(),
            email: " ada@example.com ".into(),
            phone: Some("   ".into()),
            company: Some(" Analytical Engines ".into()),
            message: Some(String::new()),
        })
        .unwrap();
        assert_eq!(lead.name, "Ada Lovelace");
        assert_eq!(lead.email, "ada@example.com");
        assert_eq!(lead.phone, None);
        assert_eq!(lead.company.as_deref(), Some("Analytical Engines"));
        assert_eq!(lead.message, None);
    }

    #[tokio::test]
    async fn long_optional_fields_are_accepted() {
        let repo = Arc::new(MockLeadRepository::default());
        let svc = LeadService::new(repo.clone());
        let out = svc
            .submit(LeadInput {
                name: "N".repeat(300),
                email: "long@example.com".into(),
                phone: Some("5".repeat(74)),
                company: Some("C".repeat(300)),
                message: None,
            })
            .await;
        assert_eq!(out.status, LeadStatus::Accepted);
        assert_eq!(repo.rows()[0].lead.phone.as_deref().map(str::len), Some(74));
    }

    #[test]
    fn outcome_serializes_without_status() {
        let v = serde_json::to_value(LeadOutcome::accepted()).unwrap();
        assert_eq!(v, serde_json::json!({"success": true, "message": SUCCESS_MESSAGE}));
    }
}
