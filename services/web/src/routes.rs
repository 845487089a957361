use crate::infra::{
    AppState, DisplayDataCatalog, InMemoryFederationReporter, InMemorySessionStore,
    LocalSessionProxy, TracingAnalytics,
};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use verify_frontend::journeys::about::{about_router, AboutService};
use verify_frontend::journeys::authn_response::{authn_response_router, AuthnResponseService};
use verify_frontend::journeys::confirmation::{confirmation_router, ConfirmationService};
use verify_frontend::journeys::eligibility::{eligibility_router, EligibilityService};

/// Collaborators shared by the journey routers.
pub(crate) struct Collaborators {
    pub(crate) sessions: Arc<InMemorySessionStore>,
    pub(crate) proxy: Arc<LocalSessionProxy>,
    pub(crate) reporter: Arc<InMemoryFederationReporter>,
    pub(crate) correlator: Arc<DisplayDataCatalog>,
    pub(crate) analytics: Arc<TracingAnalytics>,
    pub(crate) cookie_name: String,
}

pub(crate) fn with_journey_routes(collaborators: Collaborators) -> axum::Router {
    let Collaborators {
        sessions,
        proxy,
        reporter,
        correlator,
        analytics,
        cookie_name,
    } = collaborators;

    about_router(Arc::new(AboutService::new(proxy, reporter, correlator)))
        .merge(eligibility_router(Arc::new(EligibilityService::new(
            analytics,
        ))))
        .merge(confirmation_router(Arc::new(ConfirmationService::new(
            sessions.clone(),
            cookie_name.clone(),
        ))))
        .merge(authn_response_router(Arc::new(AuthnResponseService::new(
            sessions,
            cookie_name,
        ))))
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
