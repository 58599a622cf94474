use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for recorded intake submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

/// The applicant-entered form state for one flow instance. Owned exclusively
/// by that instance; reset to empty only after a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeForm {
    pub applicant_name: String,
    pub email: String,
    /// Service-family reference number (tax ID, student ID) when the policy
    /// demands one.
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub attachment: Option<FileAttachment>,
    #[serde(default)]
    pub schedule: Option<ScheduleChoice>,
}

impl IntakeForm {
    pub fn is_empty(&self) -> bool {
        *self == IntakeForm::default()
    }
}

/// Metadata for an uploaded supporting document. Only the descriptor travels
/// through the flow; file storage is out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: u64,
}

/// Requested appointment date plus one of the offered time slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleChoice {
    pub date: NaiveDate,
    pub time: String,
}

/// Outcome produced by the submission sink, consumed once to drive the
/// terminal success/error state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

/// High level status tracked for a recorded submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptStatus {
    Accepted,
}

impl ReceiptStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ReceiptStatus::Accepted => "accepted",
        }
    }
}
