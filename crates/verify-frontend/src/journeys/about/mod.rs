//! Informational "about" pages.

pub mod collaborators;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use collaborators::{
    FederationReporter, IdpDisplayDataCorrelator, ReportError, ViewableIdentityProvider,
};
pub use router::about_router;
pub use service::AboutService;
