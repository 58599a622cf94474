use std::sync::Arc;

use super::common::*;
use crate::catalog::{ServiceId, ServiceKind};
use crate::intake::domain::IntakeForm;
use crate::intake::flow::{FlowError, FlowPhase, IntakeFlow, SUBMISSION_ERROR_MESSAGE};

#[tokio::test]
async fn begin_opens_selector_with_full_catalog() {
    let sink = Arc::new(CountingSink::default());
    let mut flow = IntakeFlow::new(ServiceKind::Tax, static_catalog(), sink);

    let phase = flow.begin().await.expect("catalog loads");
    assert_eq!(phase, FlowPhase::Selecting);
    assert_eq!(flow.catalog().len(), 4);
    assert!(flow.selected_service().is_none());
}

#[tokio::test]
async fn empty_catalog_renders_zero_selectable_entries() {
    let catalog = Arc::new(FixedCatalog::new(Vec::new()));
    let sink = Arc::new(CountingSink::default());
    let mut flow = IntakeFlow::new(ServiceKind::Licenses, catalog, sink);

    let phase = flow.begin().await.expect("empty catalog is not an error");
    assert_eq!(phase, FlowPhase::Selecting);
    assert!(flow.catalog().is_empty());
}

#[tokio::test]
async fn single_entry_catalog_skips_selecting() {
    let catalog = Arc::new(FixedCatalog::single("Driver's License"));
    let sink = Arc::new(CountingSink::default());
    let mut flow = IntakeFlow::new(ServiceKind::Licenses, catalog, sink);

    let phase = flow.begin().await.expect("catalog loads");
    assert_eq!(phase, FlowPhase::FormOpen);
    assert_eq!(
        flow.selected_service().map(|s| s.name.as_str()),
        Some("Driver's License")
    );
}

#[tokio::test]
async fn catalog_failure_is_surfaced_and_flow_stays_idle() {
    let sink = Arc::new(CountingSink::default());
    let mut flow = IntakeFlow::new(ServiceKind::Tax, Arc::new(BrokenCatalog), sink);

    let err = flow.begin().await.expect_err("source is down");
    assert!(matches!(err, FlowError::Catalog(_)));
    assert_eq!(flow.phase(), FlowPhase::Idle);
}

#[tokio::test]
async fn selecting_unknown_service_is_an_error() {
    let sink = Arc::new(CountingSink::default());
    let mut flow = IntakeFlow::new(ServiceKind::Tax, static_catalog(), sink);
    flow.begin().await.expect("catalog loads");

    let err = flow.select(ServiceId(42)).expect_err("id not in catalog");
    assert!(matches!(err, FlowError::UnknownService(ServiceId(42))));
    assert_eq!(flow.phase(), FlowPhase::Selecting);
}

#[tokio::test]
async fn validation_failure_keeps_form_open_and_sink_untouched() {
    let sink = Arc::new(CountingSink::default());
    let mut flow = IntakeFlow::new(ServiceKind::Tax, static_catalog(), sink.clone());
    flow.begin().await.expect("catalog loads");
    flow.select(ServiceId(2)).expect("tax payment exists");
    flow.update_form(IntakeForm::default()).expect("form editable");

    let err = flow.submit().await.expect_err("empty form");
    assert!(matches!(err, FlowError::Validation(_)));
    assert_eq!(flow.phase(), FlowPhase::FormOpen);
    assert_eq!(sink.calls(), 0);
}

#[tokio::test]
async fn successful_license_submission_resets_form() {
    // Scenario C: a fully valid license form reaches the terminal success
    // state with the placeholder wording and an emptied form.
    let sink = Arc::new(CountingSink::default());
    let mut flow = IntakeFlow::new(ServiceKind::Licenses, static_catalog(), sink.clone());
    flow.begin().await.expect("catalog loads");
    flow.select(ServiceId(1)).expect("driver's license exists");
    flow.update_form(valid_form()).expect("form editable");

    let result = flow.submit().await.expect("submission resolves");
    assert!(result.success);
    assert_eq!(result.message, "License application submitted! (Placeholder)");
    assert_eq!(flow.phase(), FlowPhase::Succeeded);
    assert!(flow.form().is_empty());
    assert_eq!(sink.calls(), 1);
}

#[tokio::test]
async fn sink_rejection_preserves_form_and_allows_retry() {
    // Scenario D: the failure message is surfaced, the form survives, and an
    // immediate resubmission is accepted.
    let catalog = static_catalog();
    let mut flow = IntakeFlow::new(
        ServiceKind::Licenses,
        catalog,
        Arc::new(RejectingSink),
    );
    flow.begin().await.expect("catalog loads");
    flow.select(ServiceId(1)).expect("service exists");
    flow.update_form(valid_form()).expect("form editable");

    let result = flow.submit().await.expect("failure is a flow outcome");
    assert!(!result.success);
    assert_eq!(result.message, SUBMISSION_ERROR_MESSAGE);
    assert_eq!(flow.phase(), FlowPhase::Failed);
    assert_eq!(flow.form(), &valid_form());

    // Retry straight from Failed; still the same rejecting sink.
    let retry = flow.submit().await.expect("retry allowed");
    assert!(!retry.success);
    assert_eq!(flow.phase(), FlowPhase::Failed);
}

#[tokio::test]
async fn unsuccessful_sink_result_also_lands_in_failed() {
    use crate::catalog::ServiceDescriptor;
    use crate::intake::domain::SubmissionResult;
    use crate::intake::sink::{IntakeSink, SinkError};
    use async_trait::async_trait;

    struct DecliningSink;

    #[async_trait]
    impl IntakeSink for DecliningSink {
        async fn submit(
            &self,
            _kind: ServiceKind,
            _service: &ServiceDescriptor,
            _form: &IntakeForm,
        ) -> Result<SubmissionResult, SinkError> {
            Ok(SubmissionResult {
                success: false,
                message: "Submission declined.".to_string(),
            })
        }
    }

    let mut flow = IntakeFlow::new(
        ServiceKind::Licenses,
        static_catalog(),
        Arc::new(DecliningSink),
    );
    flow.begin().await.expect("catalog loads");
    flow.select(ServiceId(1)).expect("service exists");
    flow.update_form(valid_form()).expect("form editable");

    let result = flow.submit().await.expect("declined is an outcome");
    assert!(!result.success);
    assert_eq!(result.message, "Submission declined.");
    assert_eq!(flow.phase(), FlowPhase::Failed);
    assert_eq!(flow.form(), &valid_form());
}

#[tokio::test]
async fn begin_twice_is_rejected() {
    let sink = Arc::new(CountingSink::default());
    let mut flow = IntakeFlow::new(ServiceKind::Tax, static_catalog(), sink);
    flow.begin().await.expect("first begin");

    let err = flow.begin().await.expect_err("second begin");
    assert!(matches!(err, FlowError::InvalidPhase { .. }));
}

#[tokio::test]
async fn editing_after_failure_reopens_the_form() {
    let mut flow = IntakeFlow::new(
        ServiceKind::Licenses,
        static_catalog(),
        Arc::new(RejectingSink),
    );
    flow.begin().await.expect("catalog loads");
    flow.select(ServiceId(2)).expect("service exists");
    flow.update_form(valid_form()).expect("form editable");
    flow.submit().await.expect("failure outcome");
    assert_eq!(flow.phase(), FlowPhase::Failed);

    let mut edited = valid_form();
    edited.applicant_name = "Avery Q. Quinn".to_string();
    flow.update_form(edited).expect("editing allowed after failure");
    assert_eq!(flow.phase(), FlowPhase::FormOpen);
}
