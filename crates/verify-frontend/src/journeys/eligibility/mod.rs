//! "Will it work for me" eligibility questionnaire.
//!
//! Answers arrive as string form fields, are parsed into [`QuestionnaireAnswers`], and are
//! classified into one of five [`EligibilityOutcome`]s. The router owns the mapping from
//! outcome to redirect target.

pub mod classifier;
pub mod domain;
pub mod form;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use classifier::{classify, classify_form};
pub use domain::{EligibilityOutcome, NotResidentReason, QuestionnaireAnswers};
pub use form::{InvalidInput, WillItWorkForMeForm};
pub use router::eligibility_router;
pub use service::EligibilityService;
