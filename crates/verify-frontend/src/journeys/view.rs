use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

/// Named template plus the locals it is rendered with.
///
/// Rendering markup is left to the presentation tier; the front-end hands it a JSON
/// descriptor of the form `{"template": "...", <locals>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub template: &'static str,
    #[serde(flatten)]
    pub locals: Map<String, Value>,
}

impl PageView {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            locals: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.locals.insert(key.to_string(), value);
        self
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for PageView {
    fn into_response(self) -> Response {
        self.into_response_with(StatusCode::OK)
    }
}
