//! Session-held journey state and the hub session collaborators.

use std::collections::{BTreeMap, BTreeSet};
use std::convert::Infallible;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::assurance::LevelOfAssurance;

/// Identifier carried in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Cookies sent with a request, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    cookies: BTreeMap<String, String>,
}

impl SessionCookies {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cookies = BTreeMap::new();
        for value in headers.get_all(header::COOKIE) {
            let Ok(raw) = value.to_str() else {
                continue;
            };
            for pair in raw.split(';') {
                if let Some((name, value)) = pair.trim().split_once('=') {
                    let name = name.trim();
                    if !name.is_empty() {
                        cookies
                            .entry(name.to_string())
                            .or_insert_with(|| unquote(value.trim()).to_string());
                    }
                }
            }
        }
        Self { cookies }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            cookies: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Resolve the session id stored under `cookie_name`, ignoring blank values.
    pub fn session_id(&self, cookie_name: &str) -> Result<SessionId, SessionError> {
        match self.get(cookie_name) {
            Some(value) if !value.is_empty() => Ok(SessionId(value.to_string())),
            _ => Err(SessionError::MissingCookie),
        }
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionCookies
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

/// Identity provider as reported by the hub for the current transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProvider {
    pub simple_id: String,
    pub entity_id: String,
    pub levels_of_assurance: BTreeSet<LevelOfAssurance>,
}

/// Federation state for a session: the transaction and the IdPs it may use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederationInfo {
    pub transaction_simple_id: String,
    pub idps: Vec<IdentityProvider>,
}

/// Identity provider the user picked earlier in the journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedIdp {
    pub entity_id: String,
    pub simple_id: String,
    pub levels_of_assurance: BTreeSet<LevelOfAssurance>,
}

/// Front-end owned session state.
///
/// `achieved_loa` keeps the raw value written upstream so that an unknown level surfaces as
/// an error at confirmation time instead of being coerced on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneySession {
    pub transaction_simple_id: Option<String>,
    pub selected_idp: Option<SelectedIdp>,
    pub achieved_loa: Option<String>,
}

/// Maps a cookie set to the hub's federation info for that session.
pub trait SessionProxy: Send + Sync {
    fn federation_info_for_session(
        &self,
        cookies: &SessionCookies,
    ) -> Result<FederationInfo, SessionError>;
}

/// Storage for [`JourneySession`] values keyed by session id.
pub trait SessionStore: Send + Sync {
    fn load(&self, id: &SessionId) -> Result<Option<JourneySession>, SessionError>;
    fn save(&self, id: &SessionId, session: JourneySession) -> Result<(), SessionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session cookie missing")]
    MissingCookie,
    #[error("session not found")]
    NotFound,
    #[error("session service unavailable: {0}")]
    Unavailable(String),
}

impl SessionError {
    pub fn status(&self) -> StatusCode {
        match self {
            SessionError::MissingCookie | SessionError::NotFound => StatusCode::FORBIDDEN,
            SessionError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = self.status();
        let payload = json!({ "error": self.to_string() });
        (status, Json(payload)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn parses_every_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.append(
            header::COOKIE,
            HeaderValue::from_static("x_verify_session=abc123; locale=en"),
        );
        headers.append(header::COOKIE, HeaderValue::from_static("theme = dark"));

        let cookies = SessionCookies::from_headers(&headers);

        assert_eq!(cookies.get("x_verify_session"), Some("abc123"));
        assert_eq!(cookies.get("locale"), Some("en"));
        assert_eq!(cookies.get("theme"), Some("dark"));
    }

    #[test]
    fn first_cookie_wins_and_quotes_are_stripped() {
        let mut headers = HeaderMap::new();
        headers.append(
            header::COOKIE,
            HeaderValue::from_static("x_verify_session=\"abc123\"; x_verify_session=later"),
        );
        headers.append(header::COOKIE, HeaderValue::from_static("x_verify_session=other"));

        let cookies = SessionCookies::from_headers(&headers);

        assert_eq!(cookies.get("x_verify_session"), Some("abc123"));
    }

    #[test]
    fn lone_quote_is_kept() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("locale=\"en"));

        assert_eq!(SessionCookies::from_headers(&headers).get("locale"), Some("\"en"));
    }

    #[test]
    fn blank_session_cookie_is_missing() {
        let cookies = SessionCookies::from_pairs([("x_verify_session", "")]);
        assert!(matches!(
            cookies.session_id("x_verify_session"),
            Err(SessionError::MissingCookie)
        ));
    }

    #[test]
    fn missing_session_maps_to_forbidden() {
        assert_eq!(SessionError::NotFound.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            SessionError::Unavailable("down".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
