use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::catalog::{
    CatalogError, CatalogSource, ServiceDescriptor, ServiceId, ServiceKind, StaticCatalog,
};
use crate::intake::domain::{FileAttachment, IntakeForm, ReceiptId, SubmissionResult};
use crate::intake::repository::{IntakeRecord, ReceiptRepository, RepositoryError};
use crate::intake::sink::{IntakeSink, SinkError};

pub(super) fn valid_form() -> IntakeForm {
    IntakeForm {
        applicant_name: "Avery Quinn".to_string(),
        email: "avery.quinn@example.com".to_string(),
        ..IntakeForm::default()
    }
}

pub(super) fn pdf_attachment() -> FileAttachment {
    FileAttachment {
        file_name: "transcript.pdf".to_string(),
        media_type: "application/pdf".to_string(),
        size_bytes: 48_213,
    }
}

/// Sink that counts invocations and always succeeds, so tests can assert the
/// validator gated the call.
#[derive(Default)]
pub(super) struct CountingSink {
    calls: AtomicUsize,
}

impl CountingSink {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl IntakeSink for CountingSink {
    async fn submit(
        &self,
        kind: ServiceKind,
        service: &ServiceDescriptor,
        _form: &IntakeForm,
    ) -> Result<SubmissionResult, SinkError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let message = match kind {
            ServiceKind::Licenses => "License application submitted! (Placeholder)".to_string(),
            _ => format!("Your {} request has been submitted successfully.", service.name),
        };
        Ok(SubmissionResult {
            success: true,
            message,
        })
    }
}

/// Sink that always rejects, for failure-path scenarios.
#[derive(Default)]
pub(super) struct RejectingSink;

#[async_trait]
impl IntakeSink for RejectingSink {
    async fn submit(
        &self,
        _kind: ServiceKind,
        _service: &ServiceDescriptor,
        _form: &IntakeForm,
    ) -> Result<SubmissionResult, SinkError> {
        Err(SinkError::Unavailable("upstream closed".to_string()))
    }
}

/// Catalog source that always fails, for the fail-loud begin path.
#[derive(Default)]
pub(super) struct BrokenCatalog;

#[async_trait]
impl CatalogSource for BrokenCatalog {
    async fn list(&self, _kind: ServiceKind) -> Result<Vec<ServiceDescriptor>, CatalogError> {
        Err(CatalogError::Unavailable("directory offline".to_string()))
    }
}

/// Catalog source returning a caller-provided fixed list.
pub(super) struct FixedCatalog {
    entries: Mutex<Vec<ServiceDescriptor>>,
}

impl FixedCatalog {
    pub(super) fn new(entries: Vec<ServiceDescriptor>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    pub(super) fn single(name: &str) -> Self {
        Self::new(vec![ServiceDescriptor {
            id: ServiceId(1),
            name: name.to_string(),
            description: "only option".to_string(),
        }])
    }
}

#[async_trait]
impl CatalogSource for FixedCatalog {
    async fn list(&self, _kind: ServiceKind) -> Result<Vec<ServiceDescriptor>, CatalogError> {
        Ok(self.entries.lock().expect("catalog mutex poisoned").clone())
    }
}

pub(super) fn static_catalog() -> Arc<StaticCatalog> {
    Arc::new(StaticCatalog)
}

/// In-memory receipt store mirroring the production adapter.
#[derive(Default)]
pub(super) struct MemoryReceipts {
    records: Mutex<HashMap<ReceiptId, IntakeRecord>>,
}

impl MemoryReceipts {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("receipt mutex poisoned").len()
    }
}

impl ReceiptRepository for MemoryReceipts {
    fn insert(&self, record: IntakeRecord) -> Result<IntakeRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("receipt mutex poisoned");
        if guard.contains_key(&record.receipt_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.receipt_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<IntakeRecord>, RepositoryError> {
        let guard = self.records.lock().expect("receipt mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}
