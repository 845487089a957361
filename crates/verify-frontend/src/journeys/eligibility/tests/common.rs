use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::journeys::analytics::{AnalyticsError, AnalyticsReporter};
use crate::journeys::eligibility::{eligibility_router, EligibilityService, WillItWorkForMeForm};
use crate::journeys::request::RequestContext;

pub(super) fn form(
    above_age_threshold: &str,
    resident_last_12_months: &str,
    not_resident_reason: &str,
) -> WillItWorkForMeForm {
    WillItWorkForMeForm {
        above_age_threshold: Some(above_age_threshold.to_string()),
        resident_last_12_months: Some(resident_last_12_months.to_string()),
        not_resident_reason: Some(not_resident_reason.to_string()),
    }
}

pub(super) fn proceed_to_select_document_answers() -> WillItWorkForMeForm {
    form("true", "true", "noAddress")
}

pub(super) fn not_old_enough_answers() -> WillItWorkForMeForm {
    form("false", "true", "MovedRecently")
}

pub(super) fn moved_to_uk_last_year_answers() -> WillItWorkForMeForm {
    form("true", "false", "MovedRecently")
}

pub(super) fn non_resident_answers() -> WillItWorkForMeForm {
    form("true", "false", "AddressButNotResident")
}

pub(super) fn no_uk_address_answers() -> WillItWorkForMeForm {
    form("true", "false", "NoAddress")
}

pub(super) fn invalid_form_answers() -> WillItWorkForMeForm {
    WillItWorkForMeForm {
        above_age_threshold: Some("true".to_string()),
        ..WillItWorkForMeForm::default()
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAnalytics {
    actions: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryAnalytics {
    pub(super) fn actions(&self) -> Vec<(String, String)> {
        self.actions.lock().expect("analytics mutex poisoned").clone()
    }
}

impl AnalyticsReporter for MemoryAnalytics {
    fn report_action(
        &self,
        request: &RequestContext,
        action_name: &str,
    ) -> Result<(), AnalyticsError> {
        self.actions
            .lock()
            .expect("analytics mutex poisoned")
            .push((request.path.clone(), action_name.to_string()));
        Ok(())
    }
}

pub(super) struct OfflineAnalytics;

impl AnalyticsReporter for OfflineAnalytics {
    fn report_action(
        &self,
        _request: &RequestContext,
        _action_name: &str,
    ) -> Result<(), AnalyticsError> {
        Err(AnalyticsError::Transport("tracker offline".to_string()))
    }
}

pub(super) fn build_service() -> (EligibilityService<MemoryAnalytics>, MemoryAnalytics) {
    let analytics = MemoryAnalytics::default();
    let service = EligibilityService::new(Arc::new(analytics.clone()));
    (service, analytics)
}

pub(super) fn router_with_service(service: EligibilityService<MemoryAnalytics>) -> axum::Router {
    eligibility_router(Arc::new(service))
}

pub(super) fn encode(form: &WillItWorkForMeForm) -> String {
    [
        ("above_age_threshold", &form.above_age_threshold),
        ("resident_last_12_months", &form.resident_last_12_months),
        ("not_resident_reason", &form.not_resident_reason),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.as_ref().map(|value| format!("{key}={value}")))
    .collect::<Vec<_>>()
    .join("&")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
