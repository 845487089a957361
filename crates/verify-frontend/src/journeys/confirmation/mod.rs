//! LOA-specific confirmation page shown after a successful registration.

pub mod router;
pub mod selector;
pub mod service;


pub use router::confirmation_router;
pub use selector::{select_confirmation_view, ConfirmationView, UnsupportedAssuranceLevel};
pub use service::{ConfirmationError, ConfirmationService};
