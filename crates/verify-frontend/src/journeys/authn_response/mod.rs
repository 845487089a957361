//! Handling of the hub's verdict on an identity provider authentication.
//!
//! The payload is validated explicitly before anything downstream trusts it; the validated
//! response then decides the next redirect and, on success, records the achieved level of
//! assurance in the journey session.

pub mod outcome;
pub mod router;
pub mod service;
pub mod validator;


pub use outcome::{route_response, AuthnRedirect, IdpResult};
pub use router::authn_response_router;
pub use service::{AuthnResponseError, AuthnResponseService};
pub use validator::{validate, IdpAuthnResponse};
