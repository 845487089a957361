//! User journeys served by the front-end.
//!
//! Each journey pairs pure decision logic with a small axum router. Handlers translate
//! decisions into redirects or [`view::PageView`] descriptors; they never hold state of their
//! own beyond the injected collaborators.

pub mod about;
pub mod analytics;
pub mod assurance;
pub mod authn_response;
pub mod confirmation;
pub mod eligibility;
pub mod request;
pub mod session;
pub mod validation;
pub mod view;

pub use analytics::{AnalyticsError, AnalyticsReporter};
pub use assurance::LevelOfAssurance;
pub use request::RequestContext;
pub use session::{
    FederationInfo, IdentityProvider, JourneySession, SelectedIdp, SessionCookies, SessionError,
    SessionId, SessionProxy, SessionStore,
};
pub use validation::{FieldError, ValidationErrors, ValidationRule};
pub use view::PageView;
