use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::domain::{IntakeForm, ReceiptId, ReceiptStatus};
use super::repository::{IntakeRecord, ReceiptRepository, RepositoryError};
use super::requirements::policy_for;
use super::sink::{IntakeSink, SinkError};
use super::validator::{validate, ValidationError};
use crate::catalog::{CatalogError, CatalogSource, ServiceId, ServiceKind};

const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

static RECEIPT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_receipt_id() -> ReceiptId {
    let id = RECEIPT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReceiptId(format!("intake-{id:06}"))
}

/// Service composing the catalog source, field-policy table, validator,
/// submission sink, and receipt repository behind the HTTP surface.
pub struct IntakeService<C, S, R> {
    catalog: Arc<C>,
    sink: Arc<S>,
    repository: Arc<R>,
    submit_timeout: Duration,
}

impl<C, S, R> IntakeService<C, S, R>
where
    C: CatalogSource + 'static,
    S: IntakeSink + 'static,
    R: ReceiptRepository + 'static,
{
    pub fn new(catalog: Arc<C>, sink: Arc<S>, repository: Arc<R>) -> Self {
        Self {
            catalog,
            sink,
            repository,
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
        }
    }

    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = timeout;
        self
    }

    /// List the selectable services for one kind.
    pub async fn catalog(
        &self,
        kind: ServiceKind,
    ) -> Result<Vec<crate::catalog::ServiceDescriptor>, IntakeServiceError> {
        Ok(self.catalog.list(kind).await?)
    }

    /// Validate and submit one form, returning the recorded receipt.
    /// Validation failures never reach the sink; sink failures are not
    /// recorded so the caller can retry with the same form.
    pub async fn submit(
        &self,
        kind: ServiceKind,
        service_id: ServiceId,
        form: IntakeForm,
    ) -> Result<IntakeRecord, IntakeServiceError> {
        let catalog = self.catalog.list(kind).await?;
        let service = catalog
            .into_iter()
            .find(|descriptor| descriptor.id == service_id)
            .ok_or(IntakeServiceError::UnknownService(service_id))?;

        let policy = policy_for(kind, service.id);
        validate(&form, &policy)?;

        let outcome = tokio::time::timeout(
            self.submit_timeout,
            self.sink.submit(kind, &service, &form),
        )
        .await
        .map_err(|_| SinkError::Timeout)??;

        if !outcome.success {
            return Err(IntakeServiceError::Rejected(outcome.message));
        }

        let record = IntakeRecord {
            receipt_id: next_receipt_id(),
            kind,
            service,
            status: ReceiptStatus::Accepted,
            message: outcome.message,
            form,
        };

        let stored = self.repository.insert(record)?;
        info!(kind = %kind, receipt = %stored.receipt_id.0, "intake submission accepted");
        Ok(stored)
    }

    /// Fetch one recorded receipt for status responses.
    pub fn get(&self, receipt_id: &ReceiptId) -> Result<IntakeRecord, IntakeServiceError> {
        let record = self
            .repository
            .fetch(receipt_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("no service with id {0} in the catalog")]
    UnknownService(ServiceId),
    #[error("{0}")]
    Rejected(String),
}
