use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::domain::{IntakeForm, ReceiptId};
use super::flow::SUBMISSION_ERROR_MESSAGE;
use super::repository::ReceiptRepository;
use super::service::{IntakeService, IntakeServiceError};
use super::sink::IntakeSink;
use crate::catalog::{CatalogSource, ServiceId, ServiceKind};
use crate::scheduling::SlotSource;

/// Shared state for the intake endpoints: the composed service plus the
/// appointment slot source.
pub struct IntakeApi<C, S, R, L> {
    pub service: Arc<IntakeService<C, S, R>>,
    pub slots: Arc<L>,
}

impl<C, S, R, L> Clone for IntakeApi<C, S, R, L> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            slots: Arc::clone(&self.slots),
        }
    }
}

/// Router builder exposing the catalog, intake, and slot endpoints.
pub fn intake_router<C, S, R, L>(api: IntakeApi<C, S, R, L>) -> Router
where
    C: CatalogSource + 'static,
    S: IntakeSink + 'static,
    R: ReceiptRepository + 'static,
    L: SlotSource + 'static,
{
    Router::new()
        .route("/api/v1/catalog/:kind", get(catalog_handler::<C, S, R, L>))
        .route(
            "/api/v1/intake/:kind/applications",
            post(submit_handler::<C, S, R, L>),
        )
        .route(
            "/api/v1/intake/applications/:receipt_id",
            get(receipt_handler::<C, S, R, L>),
        )
        .route(
            "/api/v1/appointments/slots",
            get(slots_handler::<C, S, R, L>),
        )
        .with_state(api)
}

#[derive(Debug, Deserialize)]
pub struct IntakeRequest {
    pub service_id: u32,
    pub form: IntakeForm,
}

#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub appointment_type: Option<String>,
}

fn unknown_kind_response(raw: &str) -> Response {
    let payload = json!({ "error": format!("unknown service kind '{raw}'") });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

pub(crate) async fn catalog_handler<C, S, R, L>(
    State(api): State<IntakeApi<C, S, R, L>>,
    Path(kind): Path<String>,
) -> Response
where
    C: CatalogSource + 'static,
    S: IntakeSink + 'static,
    R: ReceiptRepository + 'static,
    L: SlotSource + 'static,
{
    let Ok(kind) = kind.parse::<ServiceKind>() else {
        return unknown_kind_response(&kind);
    };

    match api.service.catalog(kind).await {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submit_handler<C, S, R, L>(
    State(api): State<IntakeApi<C, S, R, L>>,
    Path(kind): Path<String>,
    axum::Json(request): axum::Json<IntakeRequest>,
) -> Response
where
    C: CatalogSource + 'static,
    S: IntakeSink + 'static,
    R: ReceiptRepository + 'static,
    L: SlotSource + 'static,
{
    let Ok(kind) = kind.parse::<ServiceKind>() else {
        return unknown_kind_response(&kind);
    };

    match api
        .service
        .submit(kind, ServiceId(request.service_id), request.form)
        .await
    {
        Ok(record) => {
            let view = record.receipt_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(IntakeServiceError::Validation(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(IntakeServiceError::UnknownService(id)) => {
            let payload = json!({ "error": format!("no service with id {id} in the catalog") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(IntakeServiceError::Sink(_)) | Err(IntakeServiceError::Rejected(_)) => {
            let payload = json!({ "error": SUBMISSION_ERROR_MESSAGE });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
        Err(IntakeServiceError::Catalog(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn receipt_handler<C, S, R, L>(
    State(api): State<IntakeApi<C, S, R, L>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    C: CatalogSource + 'static,
    S: IntakeSink + 'static,
    R: ReceiptRepository + 'static,
    L: SlotSource + 'static,
{
    let id = ReceiptId(receipt_id);
    match api.service.get(&id) {
        Ok(record) => {
            let view = record.receipt_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(IntakeServiceError::Repository(super::repository::RepositoryError::NotFound)) => {
            let payload = json!({
                "receipt_id": id.0,
                "status": "unknown",
                "message": "No submission on record for this receipt.",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn slots_handler<C, S, R, L>(
    State(api): State<IntakeApi<C, S, R, L>>,
    Query(query): Query<SlotQuery>,
) -> Response
where
    C: CatalogSource + 'static,
    S: IntakeSink + 'static,
    R: ReceiptRepository + 'static,
    L: SlotSource + 'static,
{
    let appointment_type = query.appointment_type.as_deref().unwrap_or("General Inquiry");
    match api.slots.available(appointment_type, query.date).await {
        Ok(slots) => (StatusCode::OK, axum::Json(slots)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
