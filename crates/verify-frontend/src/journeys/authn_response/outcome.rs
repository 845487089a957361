use super::validator::IdpAuthnResponse;

/// Hub verdicts the front-end distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdpResult {
    Success,
    Cancel,
    Failed,
}

impl IdpResult {
    /// Anything that is not an explicit success or cancellation counts as a failure.
    pub fn from_hub(raw: &str) -> Self {
        match raw {
            "SUCCESS" => IdpResult::Success,
            "CANCEL" => IdpResult::Cancel,
            _ => IdpResult::Failed,
        }
    }
}

/// Where the user goes after the hub reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthnRedirect {
    Confirmation,
    ResponseProcessing,
    FailedRegistration,
    FailedSignIn,
    Start,
}

impl AuthnRedirect {
    pub const fn path(self) -> &'static str {
        match self {
            AuthnRedirect::Confirmation => "/confirmation",
            AuthnRedirect::ResponseProcessing => "/response-processing",
            AuthnRedirect::FailedRegistration => "/failed-registration",
            AuthnRedirect::FailedSignIn => "/failed-sign-in",
            AuthnRedirect::Start => "/start",
        }
    }
}

pub fn route_response(response: &IdpAuthnResponse) -> AuthnRedirect {
    let registering = response.is_registration();
    match (IdpResult::from_hub(response.idp_result()), registering) {
        (IdpResult::Success, true) => AuthnRedirect::Confirmation,
        (IdpResult::Success, false) => AuthnRedirect::ResponseProcessing,
        (IdpResult::Cancel, true) | (IdpResult::Failed, true) => AuthnRedirect::FailedRegistration,
        (IdpResult::Cancel, false) => AuthnRedirect::Start,
        (IdpResult::Failed, false) => AuthnRedirect::FailedSignIn,
    }
}
