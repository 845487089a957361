use crate::cli::ServeArgs;
use crate::infra::{
    default_identity_providers, demo_session, AppState, DisplayDataCatalog,
    InMemoryFederationReporter, InMemorySessionStore, LocalSessionProxy, TracingAnalytics,
};
use crate::routes::{with_journey_routes, Collaborators};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};
use verify_frontend::config::{AppConfig, AppEnvironment};
use verify_frontend::error::AppError;
use verify_frontend::journeys::{SessionId, SessionStore};
use verify_frontend::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let idps = default_identity_providers();
    let sessions = Arc::new(InMemorySessionStore::default());
    if let Some(seed) = args.seed_session.take() {
        if config.environment == AppEnvironment::Production {
            warn!("ignoring --seed-session in production");
        } else {
            sessions.save(&SessionId(seed.clone()), demo_session(&idps))?;
            info!(session = %seed, "seeded demo journey session");
        }
    }

    let collaborators = Collaborators {
        proxy: Arc::new(LocalSessionProxy::new(
            sessions.clone(),
            config.session.cookie_name.clone(),
            idps,
        )),
        sessions,
        reporter: Arc::new(InMemoryFederationReporter::default()),
        correlator: Arc::new(DisplayDataCatalog::standard()),
        analytics: Arc::new(TracingAnalytics),
        cookie_name: config.session.cookie_name.clone(),
    };

    let app = with_journey_routes(collaborators)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "verify frontend ready");

    axum::serve(listener, app).await?;
    Ok(())
}
