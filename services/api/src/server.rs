use crate::cli::ServeArgs;
use crate::infra::{AppState, ScoringState};
use crate::routes::router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use jee_scorecard::answer_key::{AnswerKeyStore, ShiftTable};
use jee_scorecard::config::AppConfig;
use jee_scorecard::error::AppError;
use jee_scorecard::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let answer_keys = AnswerKeyStore::from_path(&config.answer_keys.dataset)?;
    info!(
        sessions = answer_keys.len(),
        dataset = %config.answer_keys.dataset.display(),
        "answer key dataset loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };
    let scoring_state = ScoringState::new(answer_keys, ShiftTable::standard());

    let app = router()
        .layer(Extension(app_state))
        .layer(Extension(scoring_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "response sheet scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
