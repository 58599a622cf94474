use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;

use civic_portal::catalog::CatalogSource;
use civic_portal::contact::{contact_router, MessageSink};
use civic_portal::intake::{intake_router, IntakeApi, IntakeSink, ReceiptRepository};
use civic_portal::resources::resources_router;
use civic_portal::scheduling::SlotSource;
use std::sync::Arc;

/// Compose the intake, contact, and resource routers with the operational
/// endpoints.
pub(crate) fn with_portal_routes<C, S, R, L, M>(
    api: IntakeApi<C, S, R, L>,
    mailbox: Arc<M>,
) -> axum::Router
where
    C: CatalogSource + 'static,
    S: IntakeSink + 'static,
    R: ReceiptRepository + 'static,
    L: SlotSource + 'static,
    M: MessageSink + 'static,
{
    intake_router(api)
        .merge(contact_router(mailbox))
        .merge(resources_router())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
