use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use verify_frontend::journeys::about::{
    FederationReporter, IdpDisplayDataCorrelator, ReportError, ViewableIdentityProvider,
};
use verify_frontend::journeys::{
    AnalyticsError, AnalyticsReporter, FederationInfo, IdentityProvider, JourneySession,
    LevelOfAssurance, RequestContext, SelectedIdp, SessionCookies, SessionError, SessionId,
    SessionProxy, SessionStore,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, JourneySession>>>,
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, id: &SessionId) -> Result<Option<JourneySession>, SessionError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|_| SessionError::Unavailable("session store poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }

    fn save(&self, id: &SessionId, session: JourneySession) -> Result<(), SessionError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|_| SessionError::Unavailable("session store poisoned".to_string()))?;
        guard.insert(id.clone(), session);
        Ok(())
    }
}

/// Answers federation lookups from the local session store and a fixed IdP list.
pub(crate) struct LocalSessionProxy {
    store: Arc<InMemorySessionStore>,
    cookie_name: String,
    idps: Vec<IdentityProvider>,
}

impl LocalSessionProxy {
    pub(crate) fn new(
        store: Arc<InMemorySessionStore>,
        cookie_name: impl Into<String>,
        idps: Vec<IdentityProvider>,
    ) -> Self {
        Self {
            store,
            cookie_name: cookie_name.into(),
            idps,
        }
    }
}

impl SessionProxy for LocalSessionProxy {
    fn federation_info_for_session(
        &self,
        cookies: &SessionCookies,
    ) -> Result<FederationInfo, SessionError> {
        let session_id = cookies.session_id(&self.cookie_name)?;
        let transaction_simple_id = self
            .store
            .load(&session_id)?
            .and_then(|session| session.transaction_simple_id)
            .ok_or(SessionError::NotFound)?;

        Ok(FederationInfo {
            transaction_simple_id,
            idps: self.idps.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RegistrationReport {
    pub(crate) transaction_simple_id: String,
    pub(crate) path: String,
    pub(crate) reported_at: DateTime<Utc>,
}

/// Most recent registration visits kept by [`InMemoryFederationReporter`].
pub(crate) const RECENT_REPORT_CAPACITY: usize = 256;

/// Keeps the latest registration visits, dropping the oldest once full.
#[derive(Clone)]
pub(crate) struct InMemoryFederationReporter {
    reports: Arc<Mutex<VecDeque<RegistrationReport>>>,
    capacity: usize,
}

impl Default for InMemoryFederationReporter {
    fn default() -> Self {
        Self::with_capacity(RECENT_REPORT_CAPACITY)
    }
}

impl InMemoryFederationReporter {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            reports: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    #[cfg(test)]
    pub(crate) fn reports(&self) -> Vec<RegistrationReport> {
        self.reports
            .lock()
            .expect("report mutex poisoned")
            .iter()
            .cloned()
            .collect()
    }
}

impl FederationReporter for InMemoryFederationReporter {
    fn report_registration(
        &self,
        transaction_simple_id: &str,
        request: &RequestContext,
    ) -> Result<(), ReportError> {
        let report = RegistrationReport {
            transaction_simple_id: transaction_simple_id.to_string(),
            path: request.path.clone(),
            reported_at: Utc::now(),
        };
        info!(
            transaction = %report.transaction_simple_id,
            path = %report.path,
            at = %report.reported_at.to_rfc3339(),
            "registration visit"
        );
        if self.capacity == 0 {
            return Ok(());
        }
        let mut guard = self
            .reports
            .lock()
            .map_err(|_| ReportError::Unavailable("report log poisoned".to_string()))?;
        if guard.len() == self.capacity {
            guard.pop_front();
        }
        guard.push_back(report);
        Ok(())
    }
}

/// Writes page actions to the log instead of a tracker.
#[derive(Default, Clone)]
pub(crate) struct TracingAnalytics;

impl AnalyticsReporter for TracingAnalytics {
    fn report_action(
        &self,
        request: &RequestContext,
        action_name: &str,
    ) -> Result<(), AnalyticsError> {
        info!(path = %request.path, action = action_name, "analytics action");
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct DisplayData {
    display_name: String,
    logo_path: String,
    about: Option<String>,
}

/// Display metadata keyed by IdP simple id.
#[derive(Debug, Clone, Default)]
pub(crate) struct DisplayDataCatalog {
    entries: HashMap<String, DisplayData>,
}

impl DisplayDataCatalog {
    pub(crate) fn standard() -> Self {
        let mut entries = HashMap::new();
        for (simple_id, display_name, about) in [
            ("stub-idp-one", "IDCorp", Some("Verify with your passport or driving licence.")),
            ("stub-idp-two", "Bobs Identity Service", None),
        ] {
            entries.insert(
                simple_id.to_string(),
                DisplayData {
                    display_name: display_name.to_string(),
                    logo_path: format!("/images/idps/{simple_id}.png"),
                    about: about.map(str::to_string),
                },
            );
        }
        Self { entries }
    }
}

impl IdpDisplayDataCorrelator for DisplayDataCatalog {
    fn correlate(&self, idps: &[IdentityProvider]) -> Vec<ViewableIdentityProvider> {
        idps.iter()
            .filter_map(|idp| match self.entries.get(&idp.simple_id) {
                Some(display) => Some(ViewableIdentityProvider {
                    simple_id: idp.simple_id.clone(),
                    entity_id: idp.entity_id.clone(),
                    display_name: display.display_name.clone(),
                    logo_path: display.logo_path.clone(),
                    about: display.about.clone(),
                }),
                None => {
                    warn!(idp = %idp.simple_id, "no display data for identity provider");
                    None
                }
            })
            .collect()
    }
}

pub(crate) fn default_identity_providers() -> Vec<IdentityProvider> {
    vec![
        IdentityProvider {
            simple_id: "stub-idp-one".to_string(),
            entity_id: "http://idcorp.com".to_string(),
            levels_of_assurance: BTreeSet::from([
                LevelOfAssurance::Level1,
                LevelOfAssurance::Level2,
            ]),
        },
        IdentityProvider {
            simple_id: "stub-idp-two".to_string(),
            entity_id: "http://bobs-identity-service.example.com".to_string(),
            levels_of_assurance: BTreeSet::from([LevelOfAssurance::Level2]),
        },
    ]
}

/// Journey session as it looks once the user has picked the first default IdP.
pub(crate) fn demo_session(idps: &[IdentityProvider]) -> JourneySession {
    JourneySession {
        transaction_simple_id: Some("test-rp".to_string()),
        selected_idp: idps.first().map(|idp| SelectedIdp {
            entity_id: idp.entity_id.clone(),
            simple_id: idp.simple_id.clone(),
            levels_of_assurance: idp.levels_of_assurance.clone(),
        }),
        achieved_loa: None,
    }
}
