use std::sync::OnceLock;

use regex::Regex;

use super::domain::{FileAttachment, IntakeForm};
use super::requirements::FieldPolicy;

/// Media types accepted for supporting documents.
const ACCEPTED_MEDIA_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

/// User-correctable validation failures. One error per attempt; rules run in
/// a fixed order and the first failure wins, matching the reference forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}")]
    MissingRequiredFields(String),
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("A supporting document is required.")]
    MissingFile,
    #[error("Only PDF, JPEG, or PNG files are allowed.")]
    UnsupportedFileType,
    #[error("Application details are required.")]
    MissingDetails,
    #[error("Amount is required for tax payments.")]
    MissingAmount,
    #[error("Amount must be a non-negative number.")]
    InvalidAmount,
    #[error("All fields are required.")]
    MissingSchedule,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

/// Shared email shape check; the contact form applies the same rule.
pub(crate) fn email_is_valid(email: &str) -> bool {
    email_pattern().is_match(email.trim())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

fn media_type_accepted(attachment: &FileAttachment) -> bool {
    match attachment.media_type.parse::<mime::Mime>() {
        Ok(parsed) => ACCEPTED_MEDIA_TYPES
            .iter()
            .any(|accepted| parsed.essence_str() == *accepted),
        Err(_) => false,
    }
}

/// Gate a form against the resolved field policy. Returns `Ok(())` only when
/// every rule passes; the submission sink must never be called otherwise.
pub fn validate(form: &IntakeForm, policy: &FieldPolicy) -> Result<(), ValidationError> {
    let reference_missing = policy.reference.is_some() && is_blank(&form.reference);
    if form.applicant_name.trim().is_empty() || form.email.trim().is_empty() || reference_missing {
        let message = match policy.reference {
            Some(field) => format!(
                "Applicant Name, Email, and {} are required.",
                field.label()
            ),
            None => "Applicant Name and Email are required.".to_string(),
        };
        return Err(ValidationError::MissingRequiredFields(message));
    }

    if !email_is_valid(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if policy.requires_file {
        match &form.attachment {
            None => return Err(ValidationError::MissingFile),
            Some(attachment) if !media_type_accepted(attachment) => {
                return Err(ValidationError::UnsupportedFileType)
            }
            Some(_) => {}
        }
    }

    if policy.requires_details && is_blank(&form.details) {
        return Err(ValidationError::MissingDetails);
    }

    if policy.requires_amount {
        let raw = form.amount.as_deref().map(str::trim).unwrap_or("");
        if raw.is_empty() {
            return Err(ValidationError::MissingAmount);
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => {}
            _ => return Err(ValidationError::InvalidAmount),
        }
    }

    if policy.requires_schedule {
        let time_missing = form
            .schedule
            .as_ref()
            .map(|choice| choice.time.trim().is_empty())
            .unwrap_or(true);
        if time_missing {
            return Err(ValidationError::MissingSchedule);
        }
    }

    Ok(())
}
