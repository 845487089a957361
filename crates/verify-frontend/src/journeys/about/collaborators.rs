use serde::{Deserialize, Serialize};

use crate::journeys::request::RequestContext;
use crate::journeys::session::IdentityProvider;

/// Notified whenever a user lands on the start of the registration journey.
pub trait FederationReporter: Send + Sync {
    fn report_registration(
        &self,
        transaction_simple_id: &str,
        request: &RequestContext,
    ) -> Result<(), ReportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("federation reporting unavailable: {0}")]
    Unavailable(String),
}

/// Attaches display metadata to the raw IdPs the hub returns.
///
/// Implementations drop IdPs they have no display data for.
pub trait IdpDisplayDataCorrelator: Send + Sync {
    fn correlate(&self, idps: &[IdentityProvider]) -> Vec<ViewableIdentityProvider>;
}

/// Identity provider ready for presentation on the certified companies page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewableIdentityProvider {
    pub simple_id: String,
    pub entity_id: String,
    pub display_name: String,
    pub logo_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}
