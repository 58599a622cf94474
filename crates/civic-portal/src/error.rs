use crate::config::ConfigError;
use crate::intake::{FlowError, IntakeServiceError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Intake(IntakeServiceError),
    Flow(FlowError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Intake(err) => write!(f, "intake error: {}", err),
            AppError::Flow(err) => write!(f, "intake flow error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::Flow(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Intake(IntakeServiceError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Intake(IntakeServiceError::UnknownService(_)) => StatusCode::NOT_FOUND,
            AppError::Intake(IntakeServiceError::Catalog(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Intake(IntakeServiceError::Sink(_))
            | AppError::Intake(IntakeServiceError::Rejected(_)) => StatusCode::BAD_GATEWAY,
            AppError::Flow(FlowError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Flow(FlowError::UnknownService(_)) => StatusCode::NOT_FOUND,
            AppError::Flow(FlowError::Catalog(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Flow(FlowError::InvalidPhase { .. }) => StatusCode::CONFLICT,
            AppError::Intake(IntakeServiceError::Repository(_))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal faults get the error-boundary body instead of leaking
        // configuration or infrastructure detail to the applicant.
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            Json(json!({
                "error": "Something went wrong. Please try again later.",
                "contact": "/contact",
            }))
        } else {
            Json(json!({ "error": self.to_string() }))
        };
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<IntakeServiceError> for AppError {
    fn from(value: IntakeServiceError) -> Self {
        Self::Intake(value)
    }
}

impl From<FlowError> for AppError {
    fn from(value: FlowError) -> Self {
        Self::Flow(value)
    }
}
