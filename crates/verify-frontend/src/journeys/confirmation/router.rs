use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::service::{ConfirmationError, ConfirmationService};
use crate::journeys::session::{SessionCookies, SessionStore};

pub fn confirmation_router<S>(service: Arc<ConfirmationService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/confirmation", get(confirmation_handler::<S>))
        .with_state(service)
}

pub(crate) async fn confirmation_handler<S>(
    State(service): State<Arc<ConfirmationService<S>>>,
    cookies: SessionCookies,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.page(&cookies) {
        Ok(view) => view.into_response(),
        Err(ConfirmationError::Session(err)) => err.into_response(),
        Err(ConfirmationError::NoSelectedIdp) => {
            let payload = json!({ "error": "no identity provider selected" });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(ConfirmationError::Unsupported(_)) => {
            let payload = json!({ "error": "something went wrong" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
