use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use super::collaborators::{FederationReporter, IdpDisplayDataCorrelator};
use super::service::AboutService;
use crate::journeys::request::RequestContext;
use crate::journeys::session::{SessionCookies, SessionProxy};

pub fn about_router<P, F, C>(service: Arc<AboutService<P, F, C>>) -> Router
where
    P: SessionProxy + 'static,
    F: FederationReporter + 'static,
    C: IdpDisplayDataCorrelator + 'static,
{
    Router::new()
        .route("/about", get(index_handler::<P, F, C>))
        .route(
            "/about/certified-companies",
            get(certified_companies_handler::<P, F, C>),
        )
        .route(
            "/about/choosing-a-company",
            get(choosing_a_company_handler::<P, F, C>),
        )
        .with_state(service)
}

pub(crate) async fn index_handler<P, F, C>(
    State(service): State<Arc<AboutService<P, F, C>>>,
    cookies: SessionCookies,
    request: RequestContext,
) -> Response
where
    P: SessionProxy + 'static,
    F: FederationReporter + 'static,
    C: IdpDisplayDataCorrelator + 'static,
{
    match service.index(&cookies, &request) {
        Ok(view) => view.into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn certified_companies_handler<P, F, C>(
    State(service): State<Arc<AboutService<P, F, C>>>,
    cookies: SessionCookies,
) -> Response
where
    P: SessionProxy + 'static,
    F: FederationReporter + 'static,
    C: IdpDisplayDataCorrelator + 'static,
{
    match service.certified_companies(&cookies) {
        Ok(view) => view.into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn choosing_a_company_handler<P, F, C>(
    State(service): State<Arc<AboutService<P, F, C>>>,
) -> Response
where
    P: SessionProxy + 'static,
    F: FederationReporter + 'static,
    C: IdpDisplayDataCorrelator + 'static,
{
    service.choosing_a_company().into_response()
}
