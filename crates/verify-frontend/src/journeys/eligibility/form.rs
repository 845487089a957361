use serde::{Deserialize, Serialize};

use super::domain::{NotResidentReason, QuestionnaireAnswers};
use crate::journeys::validation::{ValidationErrors, ValidationRule};

pub const ABOVE_AGE_THRESHOLD: &str = "above_age_threshold";
pub const RESIDENT_LAST_12_MONTHS: &str = "resident_last_12_months";
pub const NOT_RESIDENT_REASON: &str = "not_resident_reason";

/// Raw questionnaire submission; every answer is an optional string as posted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WillItWorkForMeForm {
    #[serde(default)]
    pub above_age_threshold: Option<String>,
    #[serde(default)]
    pub resident_last_12_months: Option<String>,
    #[serde(default)]
    pub not_resident_reason: Option<String>,
}

/// Submitted answers were missing or not among the allowed values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("please answer all the questions ({errors})")]
pub struct InvalidInput {
    pub errors: ValidationErrors,
}

impl WillItWorkForMeForm {
    /// Parse the posted strings, collecting a message for every unanswered or unknown field.
    ///
    /// The reason is only read when the user says they have not been resident; otherwise
    /// whatever was posted for it is ignored.
    pub fn answers(&self) -> Result<QuestionnaireAnswers, InvalidInput> {
        let mut errors = ValidationErrors::new();

        let above_age_threshold = parse_yes_no(
            ABOVE_AGE_THRESHOLD,
            self.above_age_threshold.as_deref(),
            "Select whether you are aged 20 or over",
            &mut errors,
        );
        let resident_last_12_months = parse_yes_no(
            RESIDENT_LAST_12_MONTHS,
            self.resident_last_12_months.as_deref(),
            "Select whether you have lived in the UK for the last 12 months",
            &mut errors,
        );

        let not_resident_reason = match resident_last_12_months {
            Some(false) => match non_blank(self.not_resident_reason.as_deref()) {
                None => {
                    errors.push(
                        NOT_RESIDENT_REASON,
                        ValidationRule::Presence,
                        "Select the option that best describes your situation",
                    );
                    None
                }
                Some(raw) => {
                    let reason = NotResidentReason::from_form_value(raw);
                    if reason.is_none() {
                        errors.push(
                            NOT_RESIDENT_REASON,
                            ValidationRule::Inclusion,
                            format!("'{raw}' is not a recognised answer"),
                        );
                    }
                    reason
                }
            },
            _ => None,
        };

        match (above_age_threshold, resident_last_12_months) {
            (Some(above_age_threshold), Some(resident_last_12_months)) if errors.is_empty() => {
                Ok(QuestionnaireAnswers {
                    above_age_threshold,
                    resident_last_12_months,
                    not_resident_reason,
                })
            }
            _ => Err(InvalidInput { errors }),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_yes_no(
    field: &'static str,
    raw: Option<&str>,
    missing_message: &str,
    errors: &mut ValidationErrors,
) -> Option<bool> {
    let Some(raw) = non_blank(raw) else {
        errors.push(field, ValidationRule::Presence, missing_message);
        return None;
    };

    match raw {
        "true" => Some(true),
        "false" => Some(false),
        other => {
            errors.push(
                field,
                ValidationRule::Boolean,
                format!("'{other}' is not a recognised answer"),
            );
            None
        }
    }
}
