use serde::{Deserialize, Serialize};

use super::domain::{IntakeForm, ReceiptId, ReceiptStatus};
use crate::catalog::{ServiceDescriptor, ServiceKind};

/// Repository record for one accepted submission. Kept in memory for the
/// session only; durable storage stays out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub receipt_id: ReceiptId,
    pub kind: ServiceKind,
    pub service: ServiceDescriptor,
    pub status: ReceiptStatus,
    pub message: String,
    pub form: IntakeForm,
}

impl IntakeRecord {
    pub fn receipt_view(&self) -> ReceiptView {
        ReceiptView {
            receipt_id: self.receipt_id.clone(),
            kind: self.kind,
            service_name: self.service.name.clone(),
            status: self.status.label(),
            message: self.message.clone(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ReceiptRepository: Send + Sync {
    fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord, RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<IntakeRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("receipt already exists")]
    Conflict,
    #[error("receipt not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized view returned to callers; applicant contact details stay out of
/// status responses.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptView {
    pub receipt_id: ReceiptId,
    pub kind: ServiceKind,
    pub service_name: String,
    pub status: &'static str,
    pub message: String,
}
