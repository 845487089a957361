use super::domain::{EligibilityOutcome, NotResidentReason, QuestionnaireAnswers};
use super::form::{InvalidInput, WillItWorkForMeForm, NOT_RESIDENT_REASON};
use crate::journeys::validation::{ValidationErrors, ValidationRule};

/// Decide where a set of answers leads.
///
/// Rules are evaluated in order and the first match wins; a recent move takes precedence
/// over the age check.
pub fn classify(answers: &QuestionnaireAnswers) -> Result<EligibilityOutcome, InvalidInput> {
    let reason = if answers.resident_last_12_months {
        None
    } else {
        match answers.not_resident_reason {
            Some(reason) => Some(reason),
            None => {
                let mut errors = ValidationErrors::new();
                errors.push(
                    NOT_RESIDENT_REASON,
                    ValidationRule::Presence,
                    "Select the option that best describes your situation",
                );
                return Err(InvalidInput { errors });
            }
        }
    };

    let outcome = match (answers.above_age_threshold, reason) {
        (_, Some(NotResidentReason::MovedRecently)) => EligibilityOutcome::MightNotWorkMovedRecently,
        (false, _) => EligibilityOutcome::MightNotWorkUnderage,
        (true, Some(NotResidentReason::NoAddress)) => EligibilityOutcome::WillNotWorkNoAddress,
        (true, Some(NotResidentReason::AddressButNotResident)) => {
            EligibilityOutcome::MayNotWorkOverseas
        }
        (true, None) => EligibilityOutcome::ProceedToDocumentSelection,
    };

    Ok(outcome)
}

/// Parse and classify a posted form in one step.
pub fn classify_form(form: &WillItWorkForMeForm) -> Result<EligibilityOutcome, InvalidInput> {
    classify(&form.answers()?)
}
