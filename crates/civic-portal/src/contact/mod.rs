//! The agency contact form: the simplest instance of the intake pattern.
//! One fixed form (name, email, subject, message), no catalog and no policy
//! lookup; validation, the delayed mock sink, and the retryable failure
//! wording all behave like the service flows.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::intake::validator::email_is_valid;
use crate::intake::{SinkError, SubmissionResult, ValidationError, SUBMISSION_ERROR_MESSAGE};

/// Confirmation wording the mock endpoint resolves with.
pub const MESSAGE_SENT: &str = "Message sent successfully!";

/// One contact submission. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Gate a contact message: all four fields present, then the email shape.
pub fn validate_message(message: &ContactMessage) -> Result<(), ValidationError> {
    let any_blank = [
        &message.name,
        &message.email,
        &message.subject,
        &message.message,
    ]
    .iter()
    .any(|field| field.trim().is_empty());
    if any_blank {
        return Err(ValidationError::MissingRequiredFields(
            "All fields are required.".to_string(),
        ));
    }

    if !email_is_valid(&message.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Delivery boundary for contact messages. Swappable like the intake sink.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<SubmissionResult, SinkError>;
}

/// Mock mailbox: resolve success after a fixed delay with the reference
/// confirmation.
pub struct PlaceholderMailbox {
    delay: Duration,
}

impl PlaceholderMailbox {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for PlaceholderMailbox {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl MessageSink for PlaceholderMailbox {
    async fn send(&self, _message: &ContactMessage) -> Result<SubmissionResult, SinkError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(SubmissionResult {
            success: true,
            message: MESSAGE_SENT.to_string(),
        })
    }
}

/// Router exposing the contact form endpoint.
pub fn contact_router<S>(sink: Arc<S>) -> Router
where
    S: MessageSink + 'static,
{
    Router::new()
        .route("/api/v1/contact/messages", post(send_handler::<S>))
        .with_state(sink)
}

async fn send_handler<S>(
    State(sink): State<Arc<S>>,
    Json(message): Json<ContactMessage>,
) -> Response
where
    S: MessageSink + 'static,
{
    if let Err(error) = validate_message(&message) {
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    match sink.send(&message).await {
        Ok(outcome) if outcome.success => {
            let payload = json!({ "message": outcome.message });
            (StatusCode::ACCEPTED, Json(payload)).into_response()
        }
        Ok(_) | Err(_) => {
            warn!(subject = %message.subject, "contact message delivery failed");
            let payload = json!({ "error": SUBMISSION_ERROR_MESSAGE });
            (StatusCode::BAD_GATEWAY, Json(payload)).into_response()
        }
    }
}
