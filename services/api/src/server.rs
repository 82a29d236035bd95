use crate::cli::ServeArgs;
use crate::infra::{default_matchmaking_config, AppState, InMemoryDirectory};
use crate::routes::with_matchmaking_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use mentor_match::config::AppConfig;
use mentor_match::error::AppError;
use mentor_match::matchmaking::fixtures;
use mentor_match::matchmaking::MatchmakingService;
use mentor_match::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = Arc::new(InMemoryDirectory::from_seed(fixtures::seed(
        Local::now().date_naive(),
    )));
    let matchmaking_service = Arc::new(MatchmakingService::new(
        directory,
        default_matchmaking_config(config.analytics.window_days),
    ));

    let app = with_matchmaking_routes(matchmaking_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "mentor match service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
