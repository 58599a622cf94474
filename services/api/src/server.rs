use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryReceiptRepository};
use crate::routes::with_portal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use civic_portal::catalog::{DelayedCatalog, StaticCatalog};
use civic_portal::config::AppConfig;
use civic_portal::contact::PlaceholderMailbox;
use civic_portal::error::AppError;
use civic_portal::intake::{IntakeApi, IntakeService, PlaceholderSink};
use civic_portal::scheduling::StandardSlotBook;
use civic_portal::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // The mock delay stands in for the directory and intake backends the
    // production deployment would call over the network.
    let delay = config.mock.delay();
    let catalog = Arc::new(DelayedCatalog::new(StaticCatalog, delay));
    let sink = Arc::new(PlaceholderSink::new(delay));
    let repository = Arc::new(InMemoryReceiptRepository::default());
    let slots = Arc::new(StandardSlotBook::new(delay));
    let mailbox = Arc::new(PlaceholderMailbox::new(delay));

    let intake_service = Arc::new(IntakeService::new(catalog, sink, repository));
    let api = IntakeApi {
        service: intake_service,
        slots,
    };

    let app = with_portal_routes(api, mailbox)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "state portal intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
