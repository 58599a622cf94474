use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use super::domain::{IntakeForm, SubmissionResult};
use super::requirements::{policy_for, FieldPolicy};
use super::sink::IntakeSink;
use super::validator::{validate, ValidationError};
use crate::catalog::{CatalogError, CatalogSource, ServiceDescriptor, ServiceId, ServiceKind};

/// Status line surfaced when the sink rejects or times out.
pub const SUBMISSION_ERROR_MESSAGE: &str = "Error sending message. Please try again.";

const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Lifecycle of one intake flow instance. `Failed` is retryable: editing or
/// resubmitting moves the instance back through `FormOpen` semantics, never
/// back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowPhase {
    Idle,
    Selecting,
    FormOpen,
    Submitting,
    Succeeded,
    Failed,
}

impl FlowPhase {
    pub const fn label(self) -> &'static str {
        match self {
            FlowPhase::Idle => "idle",
            FlowPhase::Selecting => "selecting",
            FlowPhase::FormOpen => "form_open",
            FlowPhase::Submitting => "submitting",
            FlowPhase::Succeeded => "succeeded",
            FlowPhase::Failed => "failed",
        }
    }
}

/// Error raised by flow transitions.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no service with id {0} in the catalog")]
    UnknownService(ServiceId),
    #[error("flow is in phase '{phase}', cannot {action}")]
    InvalidPhase {
        phase: &'static str,
        action: &'static str,
    },
}

/// One select/fill/validate/submit instance. Owns its state exclusively;
/// independent instances never share anything mutable. All suspension points
/// are the catalog fetch in `begin` and the sink call in `submit`.
pub struct IntakeFlow<C, S> {
    kind: ServiceKind,
    catalog_source: Arc<C>,
    sink: Arc<S>,
    submit_timeout: Duration,
    phase: FlowPhase,
    catalog: Vec<ServiceDescriptor>,
    selected: Option<Selection>,
    form: IntakeForm,
    status_message: Option<String>,
}

struct Selection {
    service: ServiceDescriptor,
    policy: FieldPolicy,
}

impl<C, S> IntakeFlow<C, S>
where
    C: CatalogSource,
    S: IntakeSink,
{
    pub fn new(kind: ServiceKind, catalog_source: Arc<C>, sink: Arc<S>) -> Self {
        Self {
            kind,
            catalog_source,
            sink,
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
            phase: FlowPhase::Idle,
            catalog: Vec::new(),
            selected: None,
            form: IntakeForm::default(),
            status_message: None,
        }
    }

    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = timeout;
        self
    }

    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    /// The fetched catalog; empty until `begin` succeeds.
    pub fn catalog(&self) -> &[ServiceDescriptor] {
        &self.catalog
    }

    pub fn selected_service(&self) -> Option<&ServiceDescriptor> {
        self.selected.as_ref().map(|selection| &selection.service)
    }

    pub fn policy(&self) -> Option<&FieldPolicy> {
        self.selected.as_ref().map(|selection| &selection.policy)
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    /// Last terminal or failure message, surfaced on success and failure alike.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Fetch the catalog and open the selector. A single-entry catalog is
    /// auto-selected and the `Selecting` phase skipped. A source failure is
    /// surfaced and the flow stays `Idle` rather than presenting a silently
    /// empty grid.
    pub async fn begin(&mut self) -> Result<FlowPhase, FlowError> {
        if self.phase != FlowPhase::Idle {
            return Err(FlowError::InvalidPhase {
                phase: self.phase.label(),
                action: "begin",
            });
        }

        let catalog = self.catalog_source.list(self.kind).await?;
        self.catalog = catalog;

        self.phase = if self.catalog.len() == 1 {
            let only = self.catalog[0].clone();
            self.selected = Some(Selection {
                policy: policy_for(self.kind, only.id),
                service: only,
            });
            FlowPhase::FormOpen
        } else {
            FlowPhase::Selecting
        };

        Ok(self.phase)
    }

    /// Pick one service from the catalog, resolving its field policy.
    pub fn select(&mut self, id: ServiceId) -> Result<&ServiceDescriptor, FlowError> {
        if self.phase != FlowPhase::Selecting {
            return Err(FlowError::InvalidPhase {
                phase: self.phase.label(),
                action: "select a service",
            });
        }

        let service = self
            .catalog
            .iter()
            .find(|descriptor| descriptor.id == id)
            .cloned()
            .ok_or(FlowError::UnknownService(id))?;

        let selection = self.selected.insert(Selection {
            policy: policy_for(self.kind, service.id),
            service,
        });
        self.phase = FlowPhase::FormOpen;
        self.status_message = None;

        Ok(&selection.service)
    }

    /// Replace the working form. Editing after a failed submission reopens
    /// the form; the previous entries were preserved for exactly that.
    pub fn update_form(&mut self, form: IntakeForm) -> Result<(), FlowError> {
        match self.phase {
            FlowPhase::FormOpen | FlowPhase::Failed => {
                self.form = form;
                self.phase = FlowPhase::FormOpen;
                Ok(())
            }
            phase => Err(FlowError::InvalidPhase {
                phase: phase.label(),
                action: "edit the form",
            }),
        }
    }

    /// Validate and submit. Validation failures never reach the sink and
    /// leave the form open. Sink failures (including timeout) preserve the
    /// form and land in `Failed`, from which resubmission is allowed
    /// immediately. Only a successful result resets the form.
    pub async fn submit(&mut self) -> Result<SubmissionResult, FlowError> {
        if !matches!(self.phase, FlowPhase::FormOpen | FlowPhase::Failed) {
            return Err(FlowError::InvalidPhase {
                phase: self.phase.label(),
                action: "submit",
            });
        }

        let selection = self.selected.as_ref().ok_or(FlowError::InvalidPhase {
            phase: self.phase.label(),
            action: "submit without a selected service",
        })?;

        validate(&self.form, &selection.policy)?;

        self.phase = FlowPhase::Submitting;

        let outcome = tokio::time::timeout(
            self.submit_timeout,
            self.sink.submit(self.kind, &selection.service, &self.form),
        )
        .await;

        let result = match outcome {
            Ok(Ok(result)) if result.success => {
                self.phase = FlowPhase::Succeeded;
                self.form = IntakeForm::default();
                result
            }
            Ok(Ok(result)) => {
                self.phase = FlowPhase::Failed;
                result
            }
            Ok(Err(err)) => {
                warn!(kind = %self.kind, error = %err, "intake sink rejected submission");
                self.phase = FlowPhase::Failed;
                SubmissionResult {
                    success: false,
                    message: SUBMISSION_ERROR_MESSAGE.to_string(),
                }
            }
            Err(_elapsed) => {
                warn!(kind = %self.kind, "intake sink timed out");
                self.phase = FlowPhase::Failed;
                SubmissionResult {
                    success: false,
                    message: SUBMISSION_ERROR_MESSAGE.to_string(),
                }
            }
        };

        self.status_message = Some(result.message.clone());
        Ok(result)
    }
}
