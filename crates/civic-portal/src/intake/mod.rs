//! The Service Intake Flow: select a service from the catalog, resolve which
//! optional fields it demands, validate the form, and hand it to the
//! submission sink. Every service page of the original portal shared this
//! exact sequence; it lives here once.

pub mod domain;
pub mod flow;
pub mod repository;
pub mod requirements;
pub mod router;
pub mod service;
pub mod sink;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{
    FileAttachment, IntakeForm, ReceiptId, ReceiptStatus, ScheduleChoice, SubmissionResult,
};
pub use flow::{FlowError, FlowPhase, IntakeFlow, SUBMISSION_ERROR_MESSAGE};
pub use repository::{IntakeRecord, ReceiptRepository, ReceiptView, RepositoryError};
pub use requirements::{policy_for, FieldPolicy, ReferenceField};
pub use router::{intake_router, IntakeApi, IntakeRequest};
pub use service::{IntakeService, IntakeServiceError};
pub use sink::{IntakeSink, PlaceholderSink, SinkError};
pub use validator::{validate, ValidationError};
