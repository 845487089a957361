use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use super::collaborators::{FederationReporter, IdpDisplayDataCorrelator};
use crate::journeys::request::RequestContext;
use crate::journeys::session::{SessionCookies, SessionError, SessionProxy};
use crate::journeys::view::PageView;

pub const INDEX_TEMPLATE: &str = "about/index";
pub const CERTIFIED_COMPANIES_TEMPLATE: &str = "about/certified_companies";
pub const CHOOSING_A_COMPANY_TEMPLATE: &str = "about/choosing_a_company";

/// Composes the session proxy, federation reporter and display correlator.
pub struct AboutService<P, F, C> {
    sessions: Arc<P>,
    reporter: Arc<F>,
    correlator: Arc<C>,
}

impl<P, F, C> AboutService<P, F, C>
where
    P: SessionProxy + 'static,
    F: FederationReporter + 'static,
    C: IdpDisplayDataCorrelator + 'static,
{
    pub fn new(sessions: Arc<P>, reporter: Arc<F>, correlator: Arc<C>) -> Self {
        Self {
            sessions,
            reporter,
            correlator,
        }
    }

    /// Landing page; every visit is reported against the session's transaction.
    pub fn index(
        &self,
        cookies: &SessionCookies,
        request: &RequestContext,
    ) -> Result<PageView, SessionError> {
        let info = self.sessions.federation_info_for_session(cookies)?;
        if let Err(err) = self
            .reporter
            .report_registration(&info.transaction_simple_id, request)
        {
            warn!(transaction = %info.transaction_simple_id, %err, "registration report failed");
        }
        Ok(PageView::new(INDEX_TEMPLATE))
    }

    pub fn certified_companies(&self, cookies: &SessionCookies) -> Result<PageView, SessionError> {
        let info = self.sessions.federation_info_for_session(cookies)?;
        let identity_providers = self.correlator.correlate(&info.idps);
        info!(
            available = info.idps.len(),
            displayed = identity_providers.len(),
            "correlated certified companies"
        );
        Ok(PageView::new(CERTIFIED_COMPANIES_TEMPLATE)
            .with("identity_providers", json!(identity_providers)))
    }

    pub fn choosing_a_company(&self) -> PageView {
        PageView::new(CHOOSING_A_COMPANY_TEMPLATE)
    }
}
