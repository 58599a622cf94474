use super::common::*;
use crate::catalog::{ServiceId, ServiceKind};
use crate::intake::domain::{FileAttachment, ScheduleChoice};
use crate::intake::requirements::policy_for;
use crate::intake::validator::{validate, ValidationError};
use chrono::NaiveDate;

#[test]
fn missing_universal_fields_short_circuit() {
    let policy = policy_for(ServiceKind::Licenses, ServiceId(1));
    let mut form = valid_form();
    form.applicant_name.clear();

    let err = validate(&form, &policy).expect_err("name missing");
    assert_eq!(
        err.to_string(),
        "Applicant Name and Email are required."
    );
}

#[test]
fn required_message_names_the_reference_field() {
    let policy = policy_for(ServiceKind::Tax, ServiceId(1));
    let form = valid_form();

    let err = validate(&form, &policy).expect_err("tax id missing");
    assert_eq!(
        err.to_string(),
        "Applicant Name, Email, and Tax ID are required."
    );
}

#[test]
fn email_without_at_sign_is_rejected() {
    let policy = policy_for(ServiceKind::Licenses, ServiceId(1));
    let mut form = valid_form();
    form.email = "avery.example.com".to_string();

    assert_eq!(
        validate(&form, &policy),
        Err(ValidationError::InvalidEmail)
    );
}

#[test]
fn email_without_dot_after_at_is_rejected() {
    let policy = policy_for(ServiceKind::Licenses, ServiceId(1));
    let mut form = valid_form();
    form.email = "avery@examplecom".to_string();

    assert_eq!(
        validate(&form, &policy),
        Err(ValidationError::InvalidEmail)
    );
}

#[test]
fn tax_payment_without_amount_yields_reference_literal() {
    // Scenario A from the observed behavior of the original tax page.
    let policy = policy_for(ServiceKind::Tax, ServiceId(2));
    let mut form = valid_form();
    form.reference = Some("T1".to_string());
    form.amount = Some(String::new());

    let err = validate(&form, &policy).expect_err("amount empty");
    assert_eq!(err.to_string(), "Amount is required for tax payments.");
}

#[test]
fn negative_amount_is_rejected() {
    let policy = policy_for(ServiceKind::Tax, ServiceId(2));
    let mut form = valid_form();
    form.reference = Some("T1".to_string());
    form.amount = Some("-10".to_string());

    assert_eq!(
        validate(&form, &policy),
        Err(ValidationError::InvalidAmount)
    );
}

#[test]
fn transcript_request_without_file_yields_document_literal() {
    // Scenario B: education "Transcript Request" demands an upload.
    let policy = policy_for(ServiceKind::Education, ServiceId(1));
    let mut form = valid_form();
    form.reference = Some("S-2210".to_string());

    let err = validate(&form, &policy).expect_err("file missing");
    assert_eq!(err.to_string(), "A supporting document is required.");
}

#[test]
fn transcript_request_with_pdf_passes() {
    let policy = policy_for(ServiceKind::Education, ServiceId(1));
    let mut form = valid_form();
    form.reference = Some("S-2210".to_string());
    form.attachment = Some(pdf_attachment());

    assert_eq!(validate(&form, &policy), Ok(()));
}

#[test]
fn unsupported_media_type_is_rejected() {
    let policy = policy_for(ServiceKind::Documents, ServiceId(4));
    let mut form = valid_form();
    form.attachment = Some(FileAttachment {
        file_name: "notes.docx".to_string(),
        media_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            .to_string(),
        size_bytes: 1_024,
    });

    let err = validate(&form, &policy).expect_err("bad media type");
    assert_eq!(
        err.to_string(),
        "Only PDF, JPEG, or PNG files are allowed."
    );
}

#[test]
fn accepted_media_types_pass() {
    let policy = policy_for(ServiceKind::Documents, ServiceId(4));
    for media_type in ["application/pdf", "image/jpeg", "image/png"] {
        let mut form = valid_form();
        form.attachment = Some(FileAttachment {
            file_name: "scan".to_string(),
            media_type: media_type.to_string(),
            size_bytes: 10,
        });
        assert_eq!(validate(&form, &policy), Ok(()), "{media_type}");
    }
}

#[test]
fn exemption_application_without_details_is_rejected() {
    let policy = policy_for(ServiceKind::Tax, ServiceId(3));
    let mut form = valid_form();
    form.reference = Some("T1".to_string());

    assert_eq!(
        validate(&form, &policy),
        Err(ValidationError::MissingDetails)
    );
}

#[test]
fn appointment_without_time_slot_is_rejected() {
    let policy = policy_for(ServiceKind::Appointments, ServiceId(2));
    let mut form = valid_form();
    form.schedule = Some(ScheduleChoice {
        date: NaiveDate::from_ymd_opt(2026, 9, 10).expect("valid date"),
        time: String::new(),
    });

    let err = validate(&form, &policy).expect_err("slot missing");
    assert_eq!(err.to_string(), "All fields are required.");
}

#[test]
fn rule_order_reports_required_fields_before_email() {
    // Both the name and the email are bad; the required-fields rule wins.
    let policy = policy_for(ServiceKind::Licenses, ServiceId(1));
    let mut form = valid_form();
    form.applicant_name.clear();
    form.email = "not-an-email".to_string();

    let err = validate(&form, &policy).expect_err("invalid form");
    assert!(matches!(err, ValidationError::MissingRequiredFields(_)));
}
