use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};

use super::selector::{select_confirmation_view, UnsupportedAssuranceLevel};
use crate::journeys::session::{SessionCookies, SessionError, SessionStore};
use crate::journeys::view::PageView;

/// Loads the journey session and renders the matching confirmation view.
pub struct ConfirmationService<S> {
    store: Arc<S>,
    cookie_name: String,
}

impl<S> ConfirmationService<S>
where
    S: SessionStore + 'static,
{
    pub fn new(store: Arc<S>, cookie_name: impl Into<String>) -> Self {
        Self {
            store,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn page(&self, cookies: &SessionCookies) -> Result<PageView, ConfirmationError> {
        let session_id = cookies.session_id(&self.cookie_name)?;
        let session = self
            .store
            .load(&session_id)?
            .ok_or(SessionError::NotFound)?;
        let idp = session
            .selected_idp
            .as_ref()
            .ok_or(ConfirmationError::NoSelectedIdp)?;

        let view = match select_confirmation_view(idp, session.achieved_loa.as_deref()) {
            Ok(view) => view,
            Err(unsupported) => {
                error!(session = %session_id.0, %unsupported, "refusing to render confirmation");
                return Err(unsupported.into());
            }
        };

        info!(template = view.template(), idp = %idp.simple_id, "rendering confirmation");
        Ok(PageView::new(view.template())
            .with("selected_idp", json!(idp))
            .with("achieved_loa", json!(view.level())))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfirmationError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("no identity provider selected for this session")]
    NoSelectedIdp,
    #[error(transparent)]
    Unsupported(#[from] UnsupportedAssuranceLevel),
}
