use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use super::{
    about_router, AboutService, FederationReporter, IdpDisplayDataCorrelator, ReportError,
    ViewableIdentityProvider,
};
use crate::journeys::assurance::LevelOfAssurance;
use crate::journeys::request::RequestContext;
use crate::journeys::session::{
    FederationInfo, IdentityProvider, SessionCookies, SessionError, SessionProxy,
};

const COOKIE: &str = "x_verify_session";

struct StubProxy;

impl SessionProxy for StubProxy {
    fn federation_info_for_session(
        &self,
        cookies: &SessionCookies,
    ) -> Result<FederationInfo, SessionError> {
        cookies.session_id(COOKIE)?;
        Ok(FederationInfo {
            transaction_simple_id: "test-rp".to_string(),
            idps: vec![idp("stub-idp-one"), idp("stub-idp-unlisted")],
        })
    }
}

fn idp(simple_id: &str) -> IdentityProvider {
    IdentityProvider {
        simple_id: simple_id.to_string(),
        entity_id: format!("http://{simple_id}.example.com"),
        levels_of_assurance: BTreeSet::from([LevelOfAssurance::Level2]),
    }
}

#[derive(Default, Clone)]
struct MemoryReporter {
    reports: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryReporter {
    fn reports(&self) -> Vec<(String, String)> {
        self.reports.lock().expect("reporter mutex poisoned").clone()
    }
}

impl FederationReporter for MemoryReporter {
    fn report_registration(
        &self,
        transaction_simple_id: &str,
        request: &RequestContext,
    ) -> Result<(), ReportError> {
        self.reports
            .lock()
            .expect("reporter mutex poisoned")
            .push((transaction_simple_id.to_string(), request.path.clone()));
        Ok(())
    }
}

struct FailingReporter;

impl FederationReporter for FailingReporter {
    fn report_registration(
        &self,
        _transaction_simple_id: &str,
        _request: &RequestContext,
    ) -> Result<(), ReportError> {
        Err(ReportError::Unavailable("analytics down".to_string()))
    }
}

struct ListedOnly;

impl IdpDisplayDataCorrelator for ListedOnly {
    fn correlate(&self, idps: &[IdentityProvider]) -> Vec<ViewableIdentityProvider> {
        idps.iter()
            .filter(|idp| idp.simple_id == "stub-idp-one")
            .map(|idp| ViewableIdentityProvider {
                simple_id: idp.simple_id.clone(),
                entity_id: idp.entity_id.clone(),
                display_name: "IDCorp".to_string(),
                logo_path: "/images/idps/stub-idp-one.png".to_string(),
                about: None,
            })
            .collect()
    }
}

fn cookies() -> SessionCookies {
    SessionCookies::from_pairs([(COOKIE, "session-1")])
}

async fn get(router: axum::Router, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::get(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    let response = router
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .expect("route executes");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&body).expect("json payload"))
}

#[test]
fn index_reports_the_registration_visit() {
    let reporter = MemoryReporter::default();
    let service = AboutService::new(
        Arc::new(StubProxy),
        Arc::new(reporter.clone()),
        Arc::new(ListedOnly),
    );

    let view = service
        .index(&cookies(), &RequestContext::new("/about"))
        .expect("page renders");

    assert_eq!(view.template, "about/index");
    assert_eq!(
        reporter.reports(),
        vec![("test-rp".to_string(), "/about".to_string())]
    );
}

#[test]
fn index_renders_even_when_reporting_fails() {
    let service = AboutService::new(
        Arc::new(StubProxy),
        Arc::new(FailingReporter),
        Arc::new(ListedOnly),
    );

    let view = service
        .index(&cookies(), &RequestContext::new("/about"))
        .expect("page renders");
    assert_eq!(view.template, "about/index");
}

#[test]
fn index_requires_a_session() {
    let reporter = MemoryReporter::default();
    let service = AboutService::new(
        Arc::new(StubProxy),
        Arc::new(reporter.clone()),
        Arc::new(ListedOnly),
    );

    let result = service.index(&SessionCookies::default(), &RequestContext::new("/about"));
    assert!(matches!(result, Err(SessionError::MissingCookie)));
    assert!(reporter.reports().is_empty());
}

#[tokio::test]
async fn certified_companies_lists_correlated_idps() {
    let router = about_router(Arc::new(AboutService::new(
        Arc::new(StubProxy),
        Arc::new(MemoryReporter::default()),
        Arc::new(ListedOnly),
    )));

    let (status, payload) = get(
        router,
        "/about/certified-companies",
        Some("x_verify_session=session-1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["template"], "about/certified_companies");
    let idps = payload["identity_providers"]
        .as_array()
        .expect("identity providers listed");
    assert_eq!(idps.len(), 1);
    assert_eq!(idps[0]["display_name"], "IDCorp");
}

#[tokio::test]
async fn choosing_a_company_needs_no_session() {
    let router = about_router(Arc::new(AboutService::new(
        Arc::new(StubProxy),
        Arc::new(MemoryReporter::default()),
        Arc::new(ListedOnly),
    )));

    let (status, payload) = get(router, "/about/choosing-a-company", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["template"], "about/choosing_a_company");
}

#[tokio::test]
async fn about_without_cookie_is_forbidden() {
    let router = about_router(Arc::new(AboutService::new(
        Arc::new(StubProxy),
        Arc::new(MemoryReporter::default()),
        Arc::new(ListedOnly),
    )));

    let (status, payload) = get(router, "/about", None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(payload["error"], "session cookie missing");
}
