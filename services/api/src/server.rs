use crate::cli::ServeArgs;
use crate::infra::{seed_demo_club, AppState, TokenSessionStore};
use crate::routes::with_club_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use klub::club::members::{ClubService, InMemoryClubRepository};
use klub::config::AppConfig;
use klub::error::AppError;
use klub::telemetry;
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

    let repository = Arc::new(InMemoryClubRepository::default());
    let sessions = Arc::new(TokenSessionStore::default());
    seed_demo_club(&repository, &sessions);
    let club_service = Arc::new(ClubService::new(Arc::clone(&repository)));

    let app = with_club_routes(club_service, sessions)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "club membership service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
