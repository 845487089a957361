use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use super::outcome::{route_response, AuthnRedirect, IdpResult};
use super::validator::validate;
use crate::journeys::session::{SessionCookies, SessionError, SessionStore};
use crate::journeys::validation::ValidationErrors;

/// Validates hub responses and records the achieved level on success.
pub struct AuthnResponseService<S> {
    store: Arc<S>,
    cookie_name: String,
}

impl<S> AuthnResponseService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, cookie_name: impl Into<String>) -> Self {
        Self {
            store,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn process(
        &self,
        cookies: &SessionCookies,
        raw: &Value,
    ) -> Result<AuthnRedirect, AuthnResponseError> {
        let response = match validate(raw) {
            Ok(response) => response,
            Err(errors) => {
                warn!(%errors, "invalid authn response from hub");
                return Err(errors.into());
            }
        };

        let session_id = cookies.session_id(&self.cookie_name)?;
        let mut session = self
            .store
            .load(&session_id)?
            .ok_or(SessionError::NotFound)?;

        // Only the latest authentication decides the achieved level.
        session.achieved_loa = match IdpResult::from_hub(response.idp_result()) {
            IdpResult::Success => response
                .loa_achieved()
                .map(|level| level.as_str().to_string()),
            _ => None,
        };
        self.store.save(&session_id, session)?;

        let redirect = route_response(&response);
        info!(
            session = %session_id.0,
            result = response.idp_result(),
            registration = response.is_registration(),
            redirect = redirect.path(),
            "processed authn response"
        );
        Ok(redirect)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthnResponseError {
    #[error("invalid authn response: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error(transparent)]
    Session(#[from] SessionError),
}
