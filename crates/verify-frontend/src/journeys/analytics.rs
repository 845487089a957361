use super::request::RequestContext;

/// Action recorded when a questionnaire answer set has been accepted.
pub const CAN_I_BE_VERIFIED_NEXT: &str = "Can I be Verified Next";

/// Outbound page-action tracking (e.g. a Piwik/Matomo tracker).
pub trait AnalyticsReporter: Send + Sync {
    fn report_action(&self, request: &RequestContext, action_name: &str)
        -> Result<(), AnalyticsError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics transport unavailable: {0}")]
    Transport(String),
}
