use std::sync::Arc;

use tracing::{info, warn};

use super::classifier::classify_form;
use super::domain::EligibilityOutcome;
use super::form::{InvalidInput, WillItWorkForMeForm};
use crate::journeys::analytics::{AnalyticsReporter, CAN_I_BE_VERIFIED_NEXT};
use crate::journeys::request::RequestContext;

/// Classifies questionnaire submissions and tags accepted ones for analytics.
pub struct EligibilityService<A> {
    analytics: Arc<A>,
}

impl<A> EligibilityService<A>
where
    A: AnalyticsReporter + 'static,
{
    pub fn new(analytics: Arc<A>) -> Self {
        Self { analytics }
    }

    pub fn submit(
        &self,
        form: &WillItWorkForMeForm,
        request: &RequestContext,
    ) -> Result<EligibilityOutcome, InvalidInput> {
        let outcome = match classify_form(form) {
            Ok(outcome) => outcome,
            Err(invalid) => {
                info!(errors = invalid.errors.len(), "questionnaire answers rejected");
                return Err(invalid);
            }
        };

        if let Err(err) = self
            .analytics
            .report_action(request, CAN_I_BE_VERIFIED_NEXT)
        {
            warn!(%err, "failed to report questionnaire analytics");
        }

        info!(outcome = outcome.label(), "questionnaire classified");
        Ok(outcome)
    }
}
