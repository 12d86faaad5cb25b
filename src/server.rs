use crate::config::AppConfig;
use crate::error::AppError;
use crate::routes::app_router;
use crate::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Shared operational handles for the HTTP layer. Only readiness and
/// metrics live here; ranking results are per-request and never shared.
#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
    pub dataset_path: Arc<PathBuf>,
}

/// Overrides applied on top of the environment-derived configuration.
#[derive(Debug, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
}

pub async fn run(overrides: ServeOverrides) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = overrides.host {
        config.server.host = host;
    }
    if let Some(port) = overrides.port {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        dataset_path: Arc::new(config.dataset.path.clone()),
    };

    let app = app_router()
        .layer(Extension(state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, dataset = %config.dataset.path.display(), "district ranking service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
