use std::time::Duration;

use async_trait::async_trait;

use super::domain::{IntakeForm, SubmissionResult};
use crate::catalog::{ServiceDescriptor, ServiceKind};

/// Error raised when the submission sink cannot produce a result. The flow
/// preserves form state and permits an immediate retry on any of these.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("submission endpoint unavailable: {0}")]
    Unavailable(String),
    #[error("submission timed out")]
    Timeout,
}

/// External collaborator that "processes" a completed form. The flow does
/// not know or care whether this reaches a real network; a production
/// deployment swaps this implementation without touching flow logic.
#[async_trait]
pub trait IntakeSink: Send + Sync {
    async fn submit(
        &self,
        kind: ServiceKind,
        service: &ServiceDescriptor,
        form: &IntakeForm,
    ) -> Result<SubmissionResult, SinkError>;
}

/// Mock sink reproducing the reference behavior: resolve success after a
/// fixed delay with the original wording, never modeling server-side
/// rejection.
pub struct PlaceholderSink {
    delay: Duration,
}

impl PlaceholderSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for PlaceholderSink {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl IntakeSink for PlaceholderSink {
    async fn submit(
        &self,
        kind: ServiceKind,
        service: &ServiceDescriptor,
        _form: &IntakeForm,
    ) -> Result<SubmissionResult, SinkError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let message = match kind {
            ServiceKind::Licenses => "License application submitted! (Placeholder)".to_string(),
            ServiceKind::Appointments => format!(
                "Your {} appointment has been scheduled successfully.",
                service.name
            ),
            _ => format!(
                "Your {} request has been submitted successfully.",
                service.name
            ),
        };

        Ok(SubmissionResult {
            success: true,
            message,
        })
    }
}
