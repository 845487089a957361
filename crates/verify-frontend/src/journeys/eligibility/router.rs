use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use serde_json::json;

use super::form::WillItWorkForMeForm;
use super::service::EligibilityService;
use crate::journeys::analytics::AnalyticsReporter;
use crate::journeys::request::RequestContext;
use crate::journeys::view::PageView;

pub const INDEX_TEMPLATE: &str = "will_it_work_for_me/index";

/// Router exposing the questionnaire page and its submission endpoint.
pub fn eligibility_router<A>(service: Arc<EligibilityService<A>>) -> Router
where
    A: AnalyticsReporter + 'static,
{
    Router::new()
        .route(
            "/will-it-work-for-me",
            get(index_handler).post(submit_handler::<A>),
        )
        .with_state(service)
}

pub(crate) async fn index_handler() -> PageView {
    PageView::new(INDEX_TEMPLATE)
}

pub(crate) async fn submit_handler<A>(
    State(service): State<Arc<EligibilityService<A>>>,
    request: RequestContext,
    Form(form): Form<WillItWorkForMeForm>,
) -> Response
where
    A: AnalyticsReporter + 'static,
{
    match service.submit(&form, &request) {
        Ok(outcome) => Redirect::to(outcome.redirect_path()).into_response(),
        Err(invalid) => PageView::new(INDEX_TEMPLATE)
            .with("errors", json!(invalid.errors))
            .with("answers", json!(form))
            .into_response_with(StatusCode::UNPROCESSABLE_ENTITY),
    }
}
