use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use super::service::{AuthnResponseError, AuthnResponseService};
use crate::journeys::session::{SessionCookies, SessionStore};

pub fn authn_response_router<S>(service: Arc<AuthnResponseService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/authn-response", post(authn_response_handler::<S>))
        .with_state(service)
}

pub(crate) async fn authn_response_handler<S>(
    State(service): State<Arc<AuthnResponseService<S>>>,
    cookies: SessionCookies,
    Json(raw): Json<Value>,
) -> Response
where
    S: SessionStore + 'static,
{
    match service.process(&cookies, &raw) {
        Ok(redirect) => Redirect::to(redirect.path()).into_response(),
        Err(AuthnResponseError::Invalid(errors)) => {
            let payload = json!({ "errors": errors });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(AuthnResponseError::Session(err)) => err.into_response(),
    }
}
